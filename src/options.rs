//! Configuration options for a batch run.
//!
//! The `Options` struct controls traversal, sink behavior, and error policy.

use std::path::PathBuf;

use crate::selector::Selectors;

/// Configuration options for a batch extraction run.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the legacy layout.
///
/// # Example
///
/// ```rust
/// use msg_scrap::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     fail_fast: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory scanned recursively for input documents.
    ///
    /// Default: `html`
    pub input_dir: PathBuf,

    /// Destination CSV file.
    ///
    /// Default: `msg_scrap.csv`
    pub output_file: PathBuf,

    /// File extension filter, without the leading dot.
    ///
    /// Default: `html`
    pub extension: String,

    /// Append to a pre-existing output file instead of truncating it.
    ///
    /// Default: `false` (each run starts from an empty file)
    pub append: bool,

    /// Abort the whole batch on the first document error instead of
    /// logging the path and skipping the document.
    ///
    /// Default: `false`
    pub fail_fast: bool,

    /// Emit rows for misaligned documents (content spilling past its
    /// reserved columns, duplicated sentinel headings) instead of raising
    /// an alignment error.
    ///
    /// Default: `false`
    pub lenient: bool,

    /// Role → selector table used by the node extractor.
    pub selectors: Selectors,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("html"),
            output_file: PathBuf::from("msg_scrap.csv"),
            extension: String::from("html"),
            append: false,
            fail_fast: false,
            lenient: false,
            selectors: Selectors::default(),
        }
    }
}
