//! Header building
//!
//! Derives an ordered column-name sequence from a document's subheading
//! texts. Two fixed leading columns are always present; every other column is
//! a subheading with its trailing punctuation character stripped, except the
//! sentinel heading which instead names the trailing column.

/// Heading text treated specially: excluded from the main column set and
/// used (stripped) to name the trailing column.
pub const SENTINEL_HEADING: &str = "Parameter:";

/// Fixed leading columns present in every header.
pub const FIXED_COLUMNS: [&str; 2] = ["msg_id", "msg_object"];

/// How many headings matched the sentinel while building a header.
///
/// Well-formed documents carry exactly one sentinel heading; the other two
/// shapes are surfaced explicitly so the caller can decide what to do with
/// them instead of falling through silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelMatch {
    /// No heading matched; the trailing column is named `""`.
    None,
    /// Exactly one heading matched (the expected shape).
    One,
    /// More than one matched; all were excluded from the main set and the
    /// last one named the trailing column.
    Many(usize),
}

/// An ordered column-name sequence derived from one document's headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Column names, leading fixed columns first, trailing parameter
    /// column last.
    pub columns: Vec<String>,

    /// Sentinel multiplicity observed while building.
    pub sentinel: SentinelMatch,
}

impl Header {
    /// Number of row slots reserved before the trailing parameter column.
    ///
    /// This is the single column-count formula the row builder aligns to;
    /// merged parameter fields start at the column after these slots.
    #[must_use]
    pub fn placeholder_len(&self) -> usize {
        self.columns.len() - 1
    }
}

/// Remove the single trailing character off a heading label.
///
/// Headings are authored with trailing punctuation (`Cause:`); column names
/// carry the bare label. Empty input stays empty.
#[must_use]
fn strip_label(text: &str) -> &str {
    match text.char_indices().last() {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Builds the column-name sequence for one document.
///
/// Header length is always `2 + (non-sentinel heading count) + 1`,
/// deterministic for identical heading ordering. Pure function; writing the
/// header to the sink is the caller's responsibility.
#[must_use]
pub fn build_header(headings: &[String]) -> Header {
    let mut columns: Vec<String> = FIXED_COLUMNS.iter().map(|c| (*c).to_string()).collect();
    let mut end_column = String::new();
    let mut matched = 0usize;

    for heading in headings {
        let label = strip_label(heading);
        if heading == SENTINEL_HEADING {
            end_column = label.to_string();
            matched += 1;
        } else {
            columns.push(label.to_string());
        }
    }

    columns.push(end_column);

    let sentinel = match matched {
        0 => SentinelMatch::None,
        1 => SentinelMatch::One,
        n => SentinelMatch::Many(n),
    };

    Header { columns, sentinel }
}
