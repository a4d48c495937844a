//! Best-effort Cyrillic → Latin.
//!
//! One char in, one canonical spelling out, with no lookahead. This keeps
//! `forward(reverse(x))` stable while a word is edited keystroke by keystroke;
//! it does not recover every Latin spelling that could have produced `x`.

use crate::scheme::Scheme;
use crate::unicode::{is_uppercase_source, lower_char, push_cased};

/// Reverse-transliterate with the global scheme.
pub fn reverse_transliterate(input: &str) -> String {
    reverse_transliterate_with(Scheme::global(), input)
}

pub fn reverse_transliterate_with(scheme: &Scheme, input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match scheme.inverse(lower_char(c)) {
            Some(latin) => push_cased(&mut out, latin, is_uppercase_source(c)),
            None => out.push(c),
        }
    }
    out
}
