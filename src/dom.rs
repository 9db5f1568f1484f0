//! DOM Operations Adapter
//!
//! Thin wrapper over the `dom_query` crate exposing the handful of
//! operations the extraction pipeline needs: parsing, selection, and
//! text retrieval in document order.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get all text content of a selection's nodes and their descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text of every matched node, one entry per node, in document order
#[must_use]
pub fn texts(sel: &Selection) -> Vec<String> {
    sel.nodes()
        .iter()
        .map(|node| Selection::from(*node).text().to_string())
        .collect()
}

/// Number of nodes matched by the selection
#[inline]
#[must_use]
pub fn node_count(sel: &Selection) -> usize {
    sel.nodes().len()
}
