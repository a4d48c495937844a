use tracing::debug_span;

use kiril_core::settings::settings;
use kiril_core::{reverse_transliterate, transliterate, ApplyMode, TransliterationOptions};

use super::apply::{apply_at_cursor_with, EditResult};
use super::word::is_separator;

/// Text field state for hosts that let the engine own the buffer.
///
/// Every mutating call re-applies transliteration to the word under the
/// cursor and returns the new snapshot. The cursor is a char offset.
pub struct EditSession {
    text: String,
    cursor: usize,
    mode: ApplyMode,
    options: TransliterationOptions,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Empty session using the mode and options from settings.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            mode: settings().editor.mode,
            options: TransliterationOptions::configured(),
        }
    }

    /// Start from existing (already displayed) text, cursor at the end.
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self.cursor = self.char_len();
        self
    }

    pub fn with_mode(mut self, mode: ApplyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_options(mut self, options: TransliterationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> ApplyMode {
        self.mode
    }

    pub fn snapshot(&self) -> EditResult {
        EditResult {
            text: self.text.clone(),
            cursor: self.cursor,
        }
    }

    /// The buffer spelled back in canonical Latin.
    pub fn latin(&self) -> String {
        reverse_transliterate(&self.text)
    }

    /// Type `s` at the cursor.
    pub fn insert(&mut self, s: &str) -> EditResult {
        let _span = debug_span!("insert", len = s.len()).entered();
        self.insert_raw(s);
        self.apply()
    }

    /// Paste `s` at the cursor.
    ///
    /// The leading fragment (up to the first separator) goes in raw so it can
    /// join the word left of the cursor; the rest is transliterated forward,
    /// which leaves pasted Cyrillic untouched.
    pub fn paste(&mut self, s: &str) -> EditResult {
        let _span = debug_span!("paste", len = s.len()).entered();
        let (head, rest) = s.split_at(s.find(is_separator).unwrap_or(s.len()));
        self.insert_raw(head);
        let result = self.apply();
        if rest.is_empty() {
            return result;
        }
        self.insert_raw(&transliterate(rest, self.options));
        self.apply()
    }

    /// Delete the char before the cursor.
    pub fn backspace(&mut self) -> EditResult {
        if self.cursor == 0 {
            return self.snapshot();
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        self.apply()
    }

    /// Delete the char after the cursor.
    pub fn delete_forward(&mut self) -> EditResult {
        if self.cursor >= self.char_len() {
            return self.snapshot();
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        self.apply()
    }

    /// Move the cursor without transliterating. Clamped to the text length.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.char_len());
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn insert_raw(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    fn apply(&mut self) -> EditResult {
        let result = apply_at_cursor_with(&self.text, self.cursor, self.mode, self.options);
        self.text.clone_from(&result.text);
        self.cursor = result.cursor;
        result
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte index of the char at `char_idx` (or the end of the text).
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
