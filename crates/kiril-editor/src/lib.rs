//! Transliterate-as-you-type on top of `kiril-core`.
//!
//! The host editor keeps Cyrillic text and a cursor. After every keystroke it
//! hands a snapshot to [`apply_at_cursor`], which re-transliterates only the
//! word around the cursor and returns the replacement text and cursor.
//! [`EditSession`] wraps that loop for hosts that would rather not track the
//! snapshot themselves.

mod apply;
mod session;
mod word;

#[cfg(test)]
mod tests;

pub use apply::{apply_at_cursor, apply_at_cursor_with, transform_word, EditResult};
pub use kiril_core::ApplyMode;
pub use session::EditSession;
pub use word::{is_separator, WordSpan};
