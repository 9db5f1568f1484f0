//! End-to-end alignment checks: markup in, header and row out.

use msg_scrap::{extract, header, row, Error, Selectors};

fn pipeline(html: &str, lenient: bool) -> msg_scrap::Result<(Vec<String>, Vec<String>)> {
    let nodes = extract::extract(html, &Selectors::default())?;
    let built = header::build_header(&nodes.headings);
    let record = row::build_row(
        &nodes.error_code,
        &nodes.content,
        &nodes.params,
        built.placeholder_len(),
        lenient,
    )?;
    Ok((built.columns, record))
}

#[test]
fn worked_example_aligns_exactly() {
    let html = r#"
        <html>
          <head><title>50_268</title></head>
          <body>
            <p class="pStandard">desc</p>
            <p class="pUeberschrift3">Cause:</p>
            <p class="pUeberschrift3">Parameter:</p>
            <table><tr>
              <td class="pTabelle_Standard">P1</td>
              <td class="pTabelle_Standard">V1</td>
            </tr></table>
          </body>
        </html>
    "#;

    let (columns, record) = match pipeline(html, false) {
        Ok(pair) => pair,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(columns, vec!["msg_id", "msg_object", "Cause", "Parameter"]);
    assert_eq!(record, vec!["50_268", "desc", "", "P1V1"]);
}

#[test]
fn zero_sentinel_document_gets_empty_trailing_column() {
    let html = r#"
        <html>
          <head><title>50_300</title></head>
          <body>
            <p class="pStandard">explanation</p>
            <p class="pUeberschrift3">Cause:</p>
            <p class="pUeberschrift3">Remedy:</p>
          </body>
        </html>
    "#;

    let (columns, record) = match pipeline(html, false) {
        Ok(pair) => pair,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(columns, vec!["msg_id", "msg_object", "Cause", "Remedy", ""]);
    // 2 fixed + 2 headings + 1 trailing
    assert_eq!(columns.len(), 2 + 2 + 1);
    // No parameter pairs, so nothing fills the trailing column
    assert_eq!(record, vec!["50_300", "explanation", "", ""]);
}

#[test]
fn multiple_parameter_pairs_extend_past_the_header() {
    let html = r#"
        <html>
          <head><title>50_301</title></head>
          <body>
            <p class="pUeberschrift3">Parameter:</p>
            <table>
              <tr>
                <td class="pTabelle_Standard">%1 =</td>
                <td class="pTabelle_Standard">channel</td>
              </tr>
              <tr>
                <td class="pTabelle_Standard">%2 =</td>
                <td class="pTabelle_Standard">axis</td>
              </tr>
            </table>
          </body>
        </html>
    "#;

    let (columns, record) = match pipeline(html, false) {
        Ok(pair) => pair,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(columns, vec!["msg_id", "msg_object", "Parameter"]);
    assert_eq!(record, vec!["50_301", "", "%1 =channel", "%2 =axis"]);
}

#[test]
fn strict_mode_rejects_content_spill() {
    // No headings at all: only msg_id and msg_object slots exist, so two
    // paragraphs cannot fit.
    let html = r#"
        <html>
          <head><title>50_400</title></head>
          <body>
            <p class="pStandard">first</p>
            <p class="pStandard">second</p>
          </body>
        </html>
    "#;

    match pipeline(html, false) {
        Err(Error::Alignment(_)) => {}
        other => panic!("expected Alignment error, got {other:?}"),
    }
}

#[test]
fn lenient_mode_reproduces_legacy_spill() {
    let html = r#"
        <html>
          <head><title>50_400</title></head>
          <body>
            <p class="pStandard">first</p>
            <p class="pStandard">second</p>
          </body>
        </html>
    "#;

    let (columns, record) = match pipeline(html, true) {
        Ok(pair) => pair,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };

    assert_eq!(columns, vec!["msg_id", "msg_object", ""]);
    assert_eq!(record, vec!["50_400", "first", "second"]);
}
