mod proptest_edit;

use proptest::prelude::*;

use super::EditSession;
use kiril_core::{ApplyMode, TransliterationOptions};

// Same syllable inventory as kiril-core's round-trip tests; test modules are
// not visible across crates. Onsets leave out y/s/h/c, whose spellings fuse
// with a neighbour (see `test_semivowel_after_y_refolds`).
const ONSETS: &[&str] = &[
    "b", "v", "g", "d", "z", "j", "k", "l", "m", "n", "p", "r", "t", "f", "sh", "ch", "kh", "ts",
    "x",
];

const NUCLEI: &[&str] = &[
    "a", "e", "i", "o", "u", "w", "q", "ya", "yo", "yu", "ye", "ai",
];

/// Lowercase Latin words built from onset + nucleus syllables.
pub(super) fn arb_word() -> impl Strategy<Value = String> {
    let syllable = (
        prop::sample::select(ONSETS.to_vec()),
        prop::sample::select(NUCLEI.to_vec()),
    )
        .prop_map(|(onset, nucleus)| format!("{onset}{nucleus}"));
    prop::collection::vec(syllable, 1..5).prop_map(|syllables| syllables.concat())
}

pub(super) fn session(mode: ApplyMode) -> EditSession {
    EditSession::new()
        .with_mode(mode)
        .with_options(TransliterationOptions::default())
}

/// Feed `keys` one char at a time, as a keyboard would.
pub(super) fn type_string(session: &mut EditSession, keys: &str) {
    let mut buf = [0u8; 4];
    for c in keys.chars() {
        session.insert(c.encode_utf8(&mut buf));
    }
}
