//! Node extraction
//!
//! Pulls the class-tagged node groups out of one parsed document: the title
//! text, the standard paragraphs, the subheadings, and the table cells, each
//! in document order. Alignment of those groups into a CSV row is the job of
//! the `header` and `row` modules.

use crate::dom;
use crate::error::{Error, Result};
use crate::selector::Selectors;

/// Node groups extracted from a single documentation page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Message id taken from the title element, whitespace-trimmed.
    pub error_code: String,

    /// Standard-paragraph texts, document order.
    pub content: Vec<String>,

    /// Subheading texts, document order.
    pub headings: Vec<String>,

    /// Table-cell texts, document order.
    pub params: Vec<String>,

    /// Count of table-row elements. Informational; callers may drop it.
    pub row_count: usize,
}

/// Extracts the node groups from one document's markup.
///
/// # Errors
///
/// Returns [`Error::MissingTitle`] when the document has no title element,
/// and [`Error::Parse`] when the markup yields no element tree at all.
/// No recovery is attempted; the caller decides whether to skip the document
/// or abort the batch.
///
/// # Example
///
/// ```rust
/// use msg_scrap::{extract, Selectors};
///
/// let html = r#"<html><head><title>50_100</title></head>
/// <body><p class="pStandard">Disk full.</p></body></html>"#;
///
/// let nodes = extract::extract(html, &Selectors::default())?;
/// assert_eq!(nodes.error_code, "50_100");
/// assert_eq!(nodes.content, vec!["Disk full.".to_string()]);
/// # Ok::<(), msg_scrap::Error>(())
/// ```
pub fn extract(html: &str, selectors: &Selectors) -> Result<Extraction> {
    let doc = dom::parse(html);

    if doc.select("*").is_empty() {
        return Err(Error::Parse("markup yields no element tree".into()));
    }

    let title = doc.select(&selectors.title);
    if title.is_empty() {
        return Err(Error::MissingTitle);
    }
    let error_code = dom::text_content(&title).trim().to_string();

    Ok(Extraction {
        error_code,
        content: dom::texts(&doc.select(&selectors.content)),
        headings: dom::texts(&doc.select(&selectors.heading)),
        params: dom::texts(&doc.select(&selectors.table_cell)),
        row_count: dom::node_count(&doc.select(&selectors.table_row)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_extract(html: &str) -> Result<Extraction> {
        extract(html, &Selectors::default())
    }

    #[test]
    fn extracts_all_node_groups_in_document_order() {
        let html = r#"
            <html>
              <head><title>50_268</title></head>
              <body>
                <p class="pStandard">First paragraph</p>
                <p class="pUeberschrift3">Cause:</p>
                <p class="pStandard">Second paragraph</p>
                <p class="pUeberschrift3">Parameter:</p>
                <table>
                  <tr>
                    <td class="pTabelle_Standard">P1</td>
                    <td class="pTabelle_Standard">V1</td>
                  </tr>
                </table>
              </body>
            </html>
        "#;

        let nodes = match default_extract(html) {
            Ok(nodes) => nodes,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };

        assert_eq!(nodes.error_code, "50_268");
        assert_eq!(
            nodes.content,
            vec!["First paragraph".to_string(), "Second paragraph".to_string()]
        );
        assert_eq!(
            nodes.headings,
            vec!["Cause:".to_string(), "Parameter:".to_string()]
        );
        assert_eq!(nodes.params, vec!["P1".to_string(), "V1".to_string()]);
        assert_eq!(nodes.row_count, 1);
    }

    #[test]
    fn missing_title_is_an_error() {
        let html = r#"<html><body><p class="pStandard">text</p></body></html>"#;
        match default_extract(html) {
            Err(Error::MissingTitle) => {}
            other => panic!("expected MissingTitle, got {other:?}"),
        }
    }

    #[test]
    fn empty_groups_are_empty_not_errors() {
        let html = "<html><head><title>50_001</title></head><body></body></html>";
        let nodes = match default_extract(html) {
            Ok(nodes) => nodes,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };

        assert!(nodes.content.is_empty());
        assert!(nodes.headings.is_empty());
        assert!(nodes.params.is_empty());
        assert_eq!(nodes.row_count, 0);
    }

    #[test]
    fn title_text_is_whitespace_trimmed() {
        let html = "<html><head><title>\n  50_042  \n</title></head><body></body></html>";
        let nodes = match default_extract(html) {
            Ok(nodes) => nodes,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(nodes.error_code, "50_042");
    }

    #[test]
    fn custom_selector_table_redirects_roles() {
        let html = r#"
            <html>
              <head><title>X_1</title></head>
              <body><div class="body-text">alt content</div></body>
            </html>
        "#;
        let selectors = Selectors {
            content: ".body-text".into(),
            ..Selectors::default()
        };

        let nodes = match extract(html, &selectors) {
            Ok(nodes) => nodes,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };
        assert_eq!(nodes.content, vec!["alt content".to_string()]);
    }
}
