//! Property-based tests for the incremental word applier.
//!
//! Random buffers and cursors check the cursor delta law; syllable-built
//! words check that typing and re-applying are stable.

use proptest::prelude::*;

use kiril_core::{transliterate, ApplyMode, TransliterationOptions};

use super::{arb_word, session, type_string};
use crate::{apply_at_cursor, apply_at_cursor_with, WordSpan};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_cyrillic() -> impl Strategy<Value = (String, usize)> {
    "[а-яёөүА-ЯЁӨҮ]{1,12}".prop_flat_map(|word| {
        let len = word.chars().count();
        (Just(word), 0..=len)
    })
}

fn arb_buffer() -> impl Strategy<Value = (String, usize)> {
    "[a-zA-Zабвшяй .,!?()'\n]{0,20}".prop_flat_map(|text| {
        let len = text.chars().count();
        (Just(text), 0..=len)
    })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn cursor_moves_by_length_delta((text, cursor) in arb_buffer()) {
        let chars: Vec<char> = text.chars().collect();
        let span = WordSpan::locate(&chars, cursor);
        let r = apply_at_cursor(&text, cursor);

        let old_len = chars.len();
        let new_len = r.text.chars().count();
        if r.text == text {
            prop_assert_eq!(r.cursor, cursor);
        } else {
            let replaced_len = new_len + span.len() - old_len;
            let expected = (cursor + replaced_len)
                .saturating_sub(span.len())
                .clamp(span.start, span.start + replaced_len);
            prop_assert_eq!(r.cursor, expected);
        }
        prop_assert!(r.cursor <= new_len);
    }

    #[test]
    fn text_outside_word_is_untouched((text, cursor) in arb_buffer()) {
        let chars: Vec<char> = text.chars().collect();
        let span = WordSpan::locate(&chars, cursor);
        let r = apply_at_cursor(&text, cursor);
        let new_chars: Vec<char> = r.text.chars().collect();

        prop_assert_eq!(&new_chars[..span.start], &chars[..span.start]);
        let tail = chars.len() - span.end;
        prop_assert_eq!(&new_chars[new_chars.len() - tail..], &chars[span.end..]);
    }

    #[test]
    fn forward_fixed_points_are_noops(word in arb_word(), pick in any::<prop::sample::Index>()) {
        let cyrillic = transliterate(&word, TransliterationOptions::default());
        let cursor = pick.index(cyrillic.chars().count() + 1);
        for mode in [ApplyMode::RoundTrip, ApplyMode::ForwardOnly] {
            let r = apply_at_cursor_with(&cyrillic, cursor, mode, TransliterationOptions::default());
            prop_assert_eq!(&r.text, &cyrillic);
            prop_assert_eq!(r.cursor, cursor);
        }
    }

    #[test]
    fn cyrillic_words_are_noops((word, cursor) in arb_cyrillic()) {
        for mode in [ApplyMode::RoundTrip, ApplyMode::ForwardOnly] {
            let r = apply_at_cursor_with(&word, cursor, mode, TransliterationOptions::default());
            prop_assert_eq!(&r.text, &word);
            prop_assert_eq!(r.cursor, cursor);
        }
    }

    #[test]
    fn typing_matches_whole_word_transliteration(word in arb_word()) {
        let mut s = session(ApplyMode::RoundTrip);
        type_string(&mut s, &word);
        let expected = transliterate(&word, TransliterationOptions::default());
        prop_assert_eq!(s.text(), expected.as_str());
        prop_assert_eq!(s.cursor(), expected.chars().count());
    }

    #[test]
    fn typed_words_read_back_as_latin(word in arb_word()) {
        let mut s = session(ApplyMode::RoundTrip);
        type_string(&mut s, &word);
        let again = transliterate(&s.latin(), TransliterationOptions::default());
        prop_assert_eq!(again.as_str(), s.text());
    }
}
