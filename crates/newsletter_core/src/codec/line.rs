//! Line codec for newsletter items and the title header.
//!
//! # Responsibility
//! - Convert one `Item` to and from one line of text.
//! - Encode/decode the leading `Title: ` header line.
//!
//! # Invariants
//! - Only the first `:` splits tag from value; later colons are content.
//! - Tags are matched case-sensitively against the closed `ItemKind` set.
//! - Decoding never panics; failure is an ordinary return value.

use crate::model::item::{Item, ItemKind};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Separator between variant tag and value.
pub const DELIMITER: char = ':';
/// Prefix written before the title on the first line of a document.
pub const TITLE_PREFIX: &str = "Title: ";

/// Reason a line could not be decoded into an `Item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Line has no `:` at all.
    MissingDelimiter,
    /// Text before the first `:` is not a known variant tag.
    UnknownTag(String),
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDelimiter => write!(f, "missing `{DELIMITER}` delimiter"),
            Self::UnknownTag(tag) => write!(f, "unknown item tag `{tag}`"),
        }
    }
}

impl Error for DecodeError {}

/// Encodes an item as one line (no terminator).
pub fn encode(item: &Item) -> String {
    item.render()
}

/// Decodes one line, returning `None` for malformed or unknown lines.
pub fn decode(line: &str) -> Option<Item> {
    try_decode(line).ok()
}

/// Decodes one line and reports why it failed.
pub fn try_decode(line: &str) -> Result<Item, DecodeError> {
    let (tag, value) = line
        .split_once(DELIMITER)
        .ok_or(DecodeError::MissingDelimiter)?;
    let kind = ItemKind::from_tag(tag).ok_or_else(|| DecodeError::UnknownTag(tag.to_string()))?;
    Ok(Item::from_parts(kind, value))
}

/// Encodes the header line for `title`.
pub fn encode_title(title: &str) -> String {
    format!("{TITLE_PREFIX}{title}")
}

/// Extracts the title from a header line.
///
/// Takes everything after the first `:` and drops the one space that
/// `encode_title` writes. A line without `:` yields an empty title.
pub fn decode_title(line: &str) -> String {
    match line.split_once(DELIMITER) {
        Some((_, rest)) => rest.strip_prefix(' ').unwrap_or(rest).to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_title, encode_title, try_decode, DecodeError};

    #[test]
    fn try_decode_reports_missing_delimiter() {
        assert_eq!(
            try_decode("NoColonHere").unwrap_err(),
            DecodeError::MissingDelimiter
        );
    }

    #[test]
    fn try_decode_reports_unknown_tag() {
        assert_eq!(
            try_decode("Bogus:x").unwrap_err(),
            DecodeError::UnknownTag("Bogus".to_string())
        );
        assert_eq!(
            try_decode(":x").unwrap_err(),
            DecodeError::UnknownTag(String::new())
        );
    }

    #[test]
    fn title_keeps_inner_whitespace_and_colons() {
        let line = encode_title("  Issue: 42");
        assert_eq!(line, "Title:   Issue: 42");
        assert_eq!(decode_title(&line), "  Issue: 42");
    }

    #[test]
    fn title_without_delimiter_is_empty() {
        assert_eq!(decode_title("just words"), "");
    }

    #[test]
    fn title_accepts_header_without_space() {
        assert_eq!(decode_title("Title:Weekly"), "Weekly");
    }
}
