//! Property-based tests for the forward/reverse pair.


use proptest::prelude::*;

/// Syllable onsets whose canonical spellings never fuse with a neighbour
/// into an unintended multigraph.
pub(crate) const ONSETS: &[&str] = &[
    "b", "v", "g", "d", "z", "j", "k", "l", "m", "n", "p", "r", "t", "f", "sh", "ch", "kh", "ts",
    "x",
];

pub(crate) const NUCLEI: &[&str] = &[
    "a", "e", "i", "o", "u", "w", "q", "ya", "yo", "yu", "ye", "ai",
];

/// Lowercase Latin words built from onset + nucleus syllables.
pub(crate) fn arb_word() -> impl Strategy<Value = String> {
    let syllable = (
        prop::sample::select(ONSETS.to_vec()),
        prop::sample::select(NUCLEI.to_vec()),
    )
        .prop_map(|(onset, nucleus)| format!("{onset}{nucleus}"));
    prop::collection::vec(syllable, 1..5).prop_map(|syllables| syllables.concat())
}
