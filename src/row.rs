//! Row building
//!
//! Assembles one data row positionally aligned to a built header: reserved
//! empty slots for the fixed and subheading columns, merged table-cell pairs
//! appended after them, then the message id and paragraph texts written into
//! the reserved slots.
//!
//! The slot count is always derived from the built header
//! ([`crate::header::Header::placeholder_len`]), never from the raw heading
//! count, so the first merged parameter pair lands in the trailing parameter
//! column for every sentinel shape.

use crate::error::{Error, Result};

/// Merge table cells pairwise: each label cell concatenated with the value
/// cell that follows it. A trailing unpaired cell is dropped.
///
/// Inputs of length 0 or 1 produce no merged fields.
#[must_use]
pub fn merge_param_pairs(params: &[String]) -> Vec<String> {
    params
        .chunks_exact(2)
        .map(|pair| format!("{}{}", pair[0], pair[1]))
        .collect()
}

/// Assemble one row aligned to `placeholder_len` reserved columns.
///
/// Field 0 carries the message id, fields `1..=content.len()` the paragraph
/// texts in document order, and the merged parameter pairs sit after the
/// reserved slots.
///
/// # Errors
///
/// In strict mode (`lenient == false`), returns [`Error::Alignment`] when the
/// paragraph texts would spill past the reserved slots into the parameter
/// columns. Lenient mode writes them through and extends the row as needed,
/// which reproduces the legacy misaligned output.
pub fn build_row(
    error_code: &str,
    content: &[String],
    params: &[String],
    placeholder_len: usize,
    lenient: bool,
) -> Result<Vec<String>> {
    if !lenient && content.len() + 1 > placeholder_len {
        return Err(Error::Alignment(format!(
            "{} content fields do not fit the {} reserved columns",
            content.len(),
            placeholder_len,
        )));
    }

    let mut row = vec![String::new(); placeholder_len];
    row.extend(merge_param_pairs(params));

    if row.is_empty() {
        row.push(String::new());
    }
    row[0] = error_code.to_string();

    for (i, text) in content.iter().enumerate() {
        let slot = i + 1;
        if slot < row.len() {
            row[slot] = text.clone();
        } else {
            row.push(text.clone());
        }
    }

    Ok(row)
}
