//! Batch orchestration
//!
//! Walks the input directory, runs the per-document pipeline
//! (read → transcode → extract → header → row), and writes both lines to a
//! single long-lived CSV sink. The sink is opened once for the whole run and
//! flushed after every document, so a failure mid-batch never leaves a
//! half-written record pair behind.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::encoding;
use crate::error::{Error, Result};
use crate::extract;
use crate::header::{self, SentinelMatch};
use crate::options::Options;
use crate::row;

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents that contributed a header/row pair to the sink.
    pub processed: usize,

    /// Documents skipped after an extraction or alignment error.
    pub skipped: usize,
}

/// Runs the whole batch described by `options`.
///
/// Every matching file under `input_dir` contributes exactly two lines to
/// the sink: its header line and its data line, `;`-delimited. The header is
/// re-emitted per document; no deduplication across documents is attempted.
///
/// The sink is created eagerly, so an empty input directory still yields an
/// existing, zero-line output file.
///
/// # Errors
///
/// I/O errors on the sink are always fatal. Per-document extraction and
/// alignment errors are logged and skipped by default, or returned
/// immediately when `options.fail_fast` is set.
pub fn run(options: &Options) -> Result<BatchSummary> {
    let sink = open_sink(options)?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_writer(sink);

    let mut summary = BatchSummary::default();

    for entry in WalkDir::new(&options.input_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(options.extension.as_str()) {
            continue;
        }

        match process_document(path, options, &mut writer) {
            Ok(()) => summary.processed += 1,
            Err(err) if matches!(err, Error::Io { .. } | Error::Csv(_)) => {
                // Sink failures poison the whole run regardless of policy
                return Err(err);
            }
            Err(err) if options.fail_fast => {
                warn!(path = %path.display(), error = %err, "aborting batch");
                return Err(err);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping document");
                summary.skipped += 1;
            }
        }
    }

    writer.flush().map_err(|source| Error::Io {
        path: options.output_file.clone(),
        source,
    })?;

    Ok(summary)
}

/// Runs the pipeline for one document and writes its header/row pair.
fn process_document(path: &Path, options: &Options, writer: &mut csv::Writer<File>) -> Result<()> {
    let bytes = fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let html = encoding::transcode_to_utf8(&bytes);

    let nodes = extract::extract(&html, &options.selectors)?;
    debug!(
        path = %path.display(),
        content = nodes.content.len(),
        headings = nodes.headings.len(),
        params = nodes.params.len(),
        table_rows = nodes.row_count,
        "extracted node groups"
    );

    let built = header::build_header(&nodes.headings);
    if let SentinelMatch::Many(count) = built.sentinel {
        if !options.lenient {
            return Err(Error::Alignment(format!(
                "{count} headings match the sentinel {:?}, expected at most one",
                header::SENTINEL_HEADING,
            )));
        }
    }

    let record = row::build_row(
        &nodes.error_code,
        &nodes.content,
        &nodes.params,
        built.placeholder_len(),
        options.lenient,
    )?;

    writer.write_record(&built.columns)?;
    writer.write_record(&record)?;
    writer.flush().map_err(|source| Error::Io {
        path: options.output_file.clone(),
        source,
    })?;

    Ok(())
}

/// Opens the sink once for the whole run, truncating unless append is set.
fn open_sink(options: &Options) -> Result<File> {
    let mut open = OpenOptions::new();
    open.write(true).create(true);
    if options.append {
        open.append(true);
    } else {
        open.truncate(true);
    }
    open.open(&options.output_file).map_err(|source| Error::Io {
        path: options.output_file.clone(),
        source,
    })
}
