//! Character encoding detection and transcoding.
//!
//! Documentation corpora exported from legacy authoring tools frequently
//! declare windows-1252 or ISO-8859-1; every document is normalized to UTF-8
//! before parsing.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Matches the charset declaration inside a meta tag, covering both the
/// `<meta charset="...">` form and the `http-equiv` content-type form.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>]+)"#).expect("valid regex")
});

/// Sniff the declared character encoding from a document's head bytes.
///
/// Only the first 1024 bytes are examined; charset declarations sit within
/// that window in well-formed pages. Defaults to UTF-8 when no declaration
/// is found or the label is unknown.
#[must_use]
pub fn detect(bytes: &[u8]) -> &'static Encoding {
    let head = &bytes[..bytes.len().min(1024)];
    let head = String::from_utf8_lossy(head);

    META_CHARSET_RE
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode raw document bytes to a UTF-8 string.
///
/// Invalid byte sequences are replaced with the Unicode replacement
/// character rather than causing errors.
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let encoding = detect(bytes);

    if encoding == UTF_8 {
        // Fast path: lossy conversion only
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(bytes);
    decoded.into_owned()
}
