//! Abbreviation of long free-text fields

use std::borrow::Cow;

/// Characters of an alert description shown in the regional panel
pub const PANEL_DESCRIPTION_LIMIT: usize = 120;

/// Characters of an alert description shown in the point popup
pub const POPUP_DESCRIPTION_LIMIT: usize = 100;

const ELLIPSIS: &str = "...";

/// Keep the first `limit` characters of `text`, appending `...` if anything was cut
///
/// Counts characters, not bytes, so multi-byte text is never split mid-character.
#[must_use]
pub fn truncate_description(text: &str, limit: usize) -> Cow<'_, str> {
    match text.char_indices().nth(limit) {
        Some((byte_index, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &text[..byte_index])),
        None => Cow::Borrowed(text),
    }
}
