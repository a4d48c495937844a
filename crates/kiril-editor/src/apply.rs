use serde::Serialize;
use tracing::{debug, debug_span};

use kiril_core::unicode::lower_char;
use kiril_core::{reverse_transliterate, transliterate, ApplyMode, Scheme, TransliterationOptions};

use super::word::WordSpan;

/// Replacement text and cursor (in chars) for the host editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditResult {
    pub text: String,
    pub cursor: usize,
}

impl EditResult {
    fn unchanged(text: &str, cursor: usize) -> Self {
        Self {
            text: text.to_string(),
            cursor,
        }
    }
}

/// Re-transliterate the word around `cursor` using round-trip
/// normalization and default options.
pub fn apply_at_cursor(text: &str, cursor: usize) -> EditResult {
    apply_at_cursor_with(
        text,
        cursor,
        ApplyMode::RoundTrip,
        TransliterationOptions::default(),
    )
}

pub fn apply_at_cursor_with(
    text: &str,
    cursor: usize,
    mode: ApplyMode,
    options: TransliterationOptions,
) -> EditResult {
    let _span = debug_span!("apply_at_cursor", cursor, ?mode).entered();
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let span = WordSpan::locate(&chars, cursor);
    if span.is_empty() {
        return EditResult::unchanged(text, cursor);
    }

    let word: String = chars[span.start..span.end].iter().collect();
    let transformed = transform_word(&word, mode, options);
    if transformed == word {
        return EditResult::unchanged(text, cursor);
    }

    let new_len = transformed.chars().count();
    let mut new_text = String::with_capacity(text.len() + transformed.len());
    new_text.extend(&chars[..span.start]);
    new_text.push_str(&transformed);
    new_text.extend(&chars[span.end..]);

    // Shift by the length delta, kept inside the replaced span.
    let new_cursor = (cursor + new_len)
        .saturating_sub(span.len())
        .clamp(span.start, span.start + new_len);

    debug!(%word, %transformed, new_cursor, "word replaced");
    EditResult {
        text: new_text,
        cursor: new_cursor,
    }
}

/// The Cyrillic form of `word` under `mode`.
///
/// A word that forward transliteration leaves alone is returned as-is in
/// either mode, so text that is already Cyrillic is never re-segmented.
pub fn transform_word(word: &str, mode: ApplyMode, options: TransliterationOptions) -> String {
    let forward = transliterate(word, options);
    if forward == word {
        return forward;
    }
    match mode {
        ApplyMode::RoundTrip if has_inverse(Scheme::global(), word) => {
            transliterate(&reverse_transliterate(word), options)
        }
        ApplyMode::RoundTrip | ApplyMode::ForwardOnly => forward,
    }
}

/// Whether reverse transliteration would change anything in `word`.
fn has_inverse(scheme: &Scheme, word: &str) -> bool {
    word.chars().any(|c| scheme.inverse(lower_char(c)).is_some())
}
