//! Data URL encoding for inline file contents.
//!
//! Inline text becomes a `data:` URL with no media type. Every byte of the
//! UTF-8 text is escaped as `%XX` except ASCII letters, digits and `-._`,
//! so path separators such as `/` and the `~` of home paths are escaped too.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Prefix of every generated URL: the `data` scheme with an empty media type.
pub const DATA_URL_PREFIX: &str = "data:,";

/// Everything but `A-Z a-z 0-9 - . _`.
const ESCAPED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

/// Percent-encode `text` with an empty safe set.
pub fn percent_encode(text: &str) -> String {
    utf8_percent_encode(text, ESCAPED).to_string()
}

/// Build the `data:,<encoded>` URL for a piece of inline file content.
pub fn encode(text: &str) -> String {
    format!("{}{}", DATA_URL_PREFIX, percent_encode(text))
}
