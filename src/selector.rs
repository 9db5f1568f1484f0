//! Role → selector table
//!
//! The documentation corpus tags meaning through fixed CSS classes instead of
//! a machine-readable schema. This table names each semantic role once, so
//! the alignment logic never sees a class string and another corpus can be
//! scraped by swapping the table.

/// CSS selectors for each semantic role in a documentation page.
///
/// Defaults match the legacy authoring convention the corpus was written
/// with. All fields are public; override individual roles as needed:
///
/// ```rust
/// use msg_scrap::Selectors;
///
/// let selectors = Selectors {
///     content: ".body-text".into(),
///     ..Selectors::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectors {
    /// Element whose text supplies the message id (one per document).
    pub title: String,

    /// Standard paragraph carrying description text.
    pub content: String,

    /// Subheading labelling a column.
    pub heading: String,

    /// Table cell carrying one half of a parameter pair.
    pub table_cell: String,

    /// Table row; counted for diagnostics, not otherwise consumed.
    pub table_row: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            title: "title".into(),
            content: ".pStandard".into(),
            heading: ".pUeberschrift3".into(),
            table_cell: ".pTabelle_Standard".into(),
            table_row: "tr".into(),
        }
    }
}
