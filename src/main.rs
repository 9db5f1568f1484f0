//! Command-line entry point for batch extraction runs.

use std::path::PathBuf;

use clap::Parser;
use msg_scrap::{Options, Selectors};

/// Extract error-message records from class-tagged HTML documentation into CSV.
#[derive(Parser)]
#[command(name = "msg-scrap", version, about)]
struct Cli {
    /// Directory scanned recursively for input documents
    #[arg(long, default_value = "html")]
    input_dir: PathBuf,

    /// Destination CSV file
    #[arg(short, long, default_value = "msg_scrap.csv")]
    output: PathBuf,

    /// File extension filter, without the leading dot
    #[arg(long, default_value = "html")]
    extension: String,

    /// Append to an existing output file instead of truncating it
    #[arg(long)]
    append: bool,

    /// Abort the whole run on the first document error
    #[arg(long)]
    fail_fast: bool,

    /// Emit rows for misaligned documents instead of skipping them
    #[arg(long)]
    lenient: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let options = Options {
        input_dir: cli.input_dir,
        output_file: cli.output,
        extension: cli.extension,
        append: cli.append,
        fail_fast: cli.fail_fast,
        lenient: cli.lenient,
        selectors: Selectors::default(),
    };

    let summary = msg_scrap::run(&options)?;
    println!(
        "{} documents written, {} skipped",
        summary.processed, summary.skipped
    );
    Ok(())
}
