//! Error types for msg-scrap.
//!
//! This module defines the error types returned by extraction and batch
//! operations.

use std::path::PathBuf;

/// Error type for extraction and batch operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Markup could not be interpreted as an HTML document.
    #[error("HTML parsing failed: {0}")]
    Parse(String),

    /// The document has no title element to supply the message id.
    #[error("document has no title element")]
    MissingTitle,

    /// Node counts break the positional alignment between header and row.
    #[error("alignment failed: {0}")]
    Alignment(String),

    /// A file could not be read or the sink could not be written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path of the file involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for extraction and batch operations.
pub type Result<T> = std::result::Result<T, Error>;
