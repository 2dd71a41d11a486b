//! Text normalization for extracted field values.

use regex::Regex;
use std::sync::LazyLock;

/// Any run of whitespace, including newlines, tabs, Unicode spaces and the
/// ASCII information separators (U+001C..U+001F).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1c-\x1f]+").expect("valid regex"));

/// Collapse every whitespace run into a single space and trim both ends.
///
/// Runs at either end become a single space before trimming, so the
/// separators are stripped there as well.
///
/// Source pages are hand-indented, so card text often spans several lines.
///
/// # Examples
/// ```
/// use hsk_converter::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  nǐ\n hǎo  "), "nǐ hǎo");
/// assert_eq!(normalize_whitespace("\t\n"), "");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
