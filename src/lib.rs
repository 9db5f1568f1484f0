//! # msg-scrap
//!
//! Extracts structured error-message records from directories of
//! class-tagged HTML documentation and writes them as `;`-delimited CSV.
//!
//! The target corpus was authored with fixed CSS class conventions
//! (`pStandard` paragraphs, `pUeberschrift3` subheadings, `pTabelle_Standard`
//! table cells) instead of a machine-readable schema. Each page contributes
//! two CSV lines: a header derived from the page's subheadings, and a data
//! row aligned to it positionally.
//!
//! ## Quick Start
//!
//! ```rust
//! use msg_scrap::{extract, header, row, Selectors};
//!
//! let html = r#"<html><head><title>50_268</title></head><body>
//! <p class="pStandard">Tool change aborted.</p>
//! <p class="pUeberschrift3">Cause:</p>
//! <p class="pUeberschrift3">Parameter:</p>
//! <table><tr>
//! <td class="pTabelle_Standard">%1 =</td>
//! <td class="pTabelle_Standard">channel number</td>
//! </tr></table>
//! </body></html>"#;
//!
//! let nodes = extract::extract(html, &Selectors::default())?;
//! let built = header::build_header(&nodes.headings);
//! let record = row::build_row(
//!     &nodes.error_code,
//!     &nodes.content,
//!     &nodes.params,
//!     built.placeholder_len(),
//!     false,
//! )?;
//!
//! assert_eq!(built.columns, vec!["msg_id", "msg_object", "Cause", "Parameter"]);
//! assert_eq!(record[0], "50_268");
//! # Ok::<(), msg_scrap::Error>(())
//! ```
//!
//! Whole-directory runs go through [`run`] with [`Options`] controlling the
//! scan root, sink, and error policy.

mod error;
mod options;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Role → selector table for the documentation corpus.
pub mod selector;

/// Per-document node extraction.
pub mod extract;

/// Column-name derivation from subheading texts.
pub mod header;

/// Positional row assembly.
pub mod row;

/// Directory traversal, per-document orchestration, CSV sink.
pub mod batch;

// Public API - re-exports
pub use batch::{run, BatchSummary};
pub use error::{Error, Result};
pub use options::Options;
pub use selector::Selectors;
