//! Latin → Cyrillic transliteration.
//!
//! A single left-to-right scan: at each position the longest multigraph wins,
//! otherwise the character goes through the single-character table (or is
//! copied unchanged). Two rules look beyond the current key:
//!
//! - `i` right after an emitted Cyrillic vowel becomes `й`;
//! - with `ascii_harmony`, `o`/`u` become `ө`/`ү` inside a token that
//!   contains a front vowel.

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::cache::{global_cache, CacheKey};
use crate::scheme::Scheme;
use crate::settings::settings;
use crate::unicode::{is_cyrillic_vowel, is_front_vowel, is_uppercase_source, lower_char, push_cased};

const SEMIVOWEL: &str = "й";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransliterationOptions {
    /// Capitalize the first Cyrillic char of a unit whose first source
    /// char was uppercase.
    pub preserve_case: bool,
    pub ascii_harmony: bool,
}

impl Default for TransliterationOptions {
    fn default() -> Self {
        Self {
            preserve_case: true,
            ascii_harmony: false,
        }
    }
}

impl TransliterationOptions {
    /// Options from the `[transliteration]` settings section.
    pub fn configured() -> Self {
        let t = &settings().transliteration;
        Self {
            preserve_case: t.preserve_case,
            ascii_harmony: t.ascii_harmony,
        }
    }
}

/// Transliterate with the global scheme, memoized in the process-wide cache.
pub fn transliterate(input: &str, options: TransliterationOptions) -> String {
    let _span = debug_span!("transliterate", len = input.len()).entered();
    if input.is_empty() {
        return String::new();
    }

    let key = CacheKey::new(input, options);
    let cached = global_cache().get(&key).map(str::to_string);
    if let Some(hit) = cached {
        debug!("cache hit");
        return hit;
    }

    // Lock is released while scanning; insert() ignores a key that another
    // thread filled in the meantime.
    let out = transliterate_with(Scheme::global(), input, options);
    global_cache().insert(key, out.clone());
    out
}

/// [`transliterate`] with the configured default options.
pub fn transliterate_default(input: &str) -> String {
    transliterate(input, TransliterationOptions::configured())
}

/// Uncached transliteration against an explicit scheme.
pub fn transliterate_with(scheme: &Scheme, input: &str, options: TransliterationOptions) -> String {
    let source: Vec<char> = input.chars().collect();
    let lowered: Vec<char> = source.iter().map(|&c| lower_char(c)).collect();
    let mut out = String::with_capacity(input.len() * 2);

    let mut i = 0;
    while i < source.len() {
        let capitalize = options.preserve_case && is_uppercase_source(source[i]);

        if let Some((len, cyrillic)) = scheme.longest_multigraph(&lowered[i..]) {
            push_cased(&mut out, cyrillic, capitalize);
            i += len;
            continue;
        }

        let lower = lowered[i];
        let after_vowel = out.chars().next_back().is_some_and(is_cyrillic_vowel);
        if lower == 'i' && after_vowel {
            push_cased(&mut out, SEMIVOWEL, capitalize);
        } else if let Some(front) = harmony_vowel(lower, &source, i, options) {
            push_cased(&mut out, front, capitalize);
        } else {
            match scheme.single(lower) {
                Some(cyrillic) => push_cased(&mut out, cyrillic, capitalize),
                None => out.push(source[i]),
            }
        }
        i += 1;
    }

    out
}

/// Front-rounded replacement for `o`/`u` when harmony mode is on and the
/// whitespace-delimited token around `pos` contains a front vowel.
fn harmony_vowel(
    lower: char,
    source: &[char],
    pos: usize,
    options: TransliterationOptions,
) -> Option<&'static str> {
    if !options.ascii_harmony {
        return None;
    }
    let front = match lower {
        'o' => "ө",
        'u' => "ү",
        _ => return None,
    };
    let start = source[..pos]
        .iter()
        .rposition(|c| c.is_whitespace())
        .map_or(0, |p| p + 1);
    let end = source[pos..]
        .iter()
        .position(|c| c.is_whitespace())
        .map_or(source.len(), |p| pos + p);
    source[start..end]
        .iter()
        .any(|&c| is_front_vowel(c))
        .then_some(front)
}
