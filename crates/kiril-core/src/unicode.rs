//! Character-level helpers for mixed Latin/Cyrillic text.

/// Vowels of Mongolian Cyrillic that trigger the `i` → `й` rule when they
/// precede a Latin `i` in the output.
const CYRILLIC_VOWELS: [char; 12] = ['а', 'э', 'е', 'ё', 'о', 'у', 'ү', 'ө', 'ы', 'и', 'я', 'ю'];

/// Latin letters that mark a token as front-vowel for the harmony heuristic.
const FRONT_VOWELS: [char; 6] = ['e', 'i', 'y', 'ä', 'ü', 'ö'];

/// Lowercase a single char without changing the char count.
///
/// Characters whose lowercase form expands to several chars (e.g. `İ`) are
/// returned as-is so callers can index the lowered buffer in lockstep with
/// the source.
pub fn lower_char(c: char) -> char {
    let mut it = c.to_lowercase();
    match (it.next(), it.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// True when `c` carries case information, i.e. its lowercase form differs.
pub fn is_uppercase_source(c: char) -> bool {
    lower_char(c) != c
}

pub fn is_cyrillic_vowel(c: char) -> bool {
    CYRILLIC_VOWELS.contains(&lower_char(c))
}

pub fn is_front_vowel(c: char) -> bool {
    FRONT_VOWELS.contains(&lower_char(c))
}

/// Push `s` onto `out`, uppercasing only its first char when `capitalize`.
pub fn push_cased(out: &mut String, s: &str, capitalize: bool) {
    if !capitalize {
        out.push_str(s);
        return;
    }
    let mut chars = s.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
