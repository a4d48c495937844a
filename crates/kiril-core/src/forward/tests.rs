use super::*;
use crate::cache::{cache_capacity, cache_len};

fn tr(s: &str) -> String {
    transliterate(s, TransliterationOptions::default())
}

fn harmony(s: &str) -> String {
    transliterate(
        s,
        TransliterationOptions {
            ascii_harmony: true,
            ..Default::default()
        },
    )
}

fn capitalize(s: &str) -> String {
    let mut out = String::new();
    push_cased(&mut out, s, true);
    out
}

// --- Scheme basics ---

#[test]
fn test_bayar() {
    assert_eq!(tr("bayar"), "баяр");
}

#[test]
fn test_explicit_front_vowels() {
    assert_eq!(tr("w q"), "ү ө");
}

#[test]
fn test_empty() {
    assert_eq!(tr(""), "");
}

#[test]
fn test_x_expands() {
    assert_eq!(tr("xaan"), "ксаан");
    assert_eq!(tr("X"), "Кс");
}

#[test]
fn test_soft_sign_keys() {
    assert_eq!(tr("'"), "ь");
    assert_eq!(tr("`"), "ь");
    assert_eq!(tr("Ë"), "Ё");
}

// --- Longest match ---

#[test]
fn test_every_multigraph_maps_to_its_value() {
    for (latin, cyrillic) in Scheme::global().multigraphs() {
        assert_eq!(tr(latin), cyrillic, "multigraph {latin:?}");
    }
}

#[test]
fn test_longest_match_wins() {
    assert_eq!(tr("shchi"), "щи");
    assert_eq!(tr("schi"), "щи");
    // "shc" is not a key: fall back to "sh" then "c"
    assert_eq!(tr("shc"), "шц");
    assert_eq!(tr("yyy"), "йы");
}

#[test]
fn test_multigraph_is_matched_case_insensitively() {
    assert_eq!(tr("SHU"), "ШУ");
    assert_eq!(tr("sHu"), "шу");
}

// --- Context rule ---

#[test]
fn test_i_after_vowel_is_semivowel() {
    assert_eq!(tr("ai"), "ай");
    assert_eq!(tr("si"), "си");
    assert_eq!(tr("ii"), "ий");
}

#[test]
fn test_i_after_uppercase_vowel() {
    assert_eq!(tr("AI"), "АЙ");
}

#[test]
fn test_i_after_existing_cyrillic() {
    // Already-displayed Cyrillic counts as emitted output
    assert_eq!(tr("аi"), "ай");
    assert_eq!(tr("сi"), "си");
}

#[test]
fn test_shinii() {
    assert_eq!(tr("Shinii"), "Шиний");
}

// --- Case ---

#[test]
fn test_preserve_case_off() {
    let opts = TransliterationOptions {
        preserve_case: false,
        ..Default::default()
    };
    assert_eq!(transliterate("BAYAR", opts), "баяр");
}

#[test]
fn test_all_caps_capitalizes_each_unit() {
    assert_eq!(tr("BAYAR"), "БАЯР");
}

#[test]
fn test_case_propagation_for_single_tokens() {
    for word in ["bayar", "shinii", "xaan", "tsagaan", "yo", "mongol", "qvql", "chuluun"] {
        assert_eq!(tr(&capitalize(word)), capitalize(&tr(word)), "word {word:?}");
    }
}

// --- Passthrough ---

#[test]
fn test_unknown_chars_pass_through() {
    for s in ["7", "!", "-", "?", "日本", "\n", "İ"] {
        assert_eq!(tr(s), s);
    }
}

#[test]
fn test_punctuation_and_spaces() {
    assert_eq!(tr("sain uu? bayarlalaa."), "сайн уу? баярлалаа.");
}

// --- Harmony ---

#[test]
fn test_harmony_front_token() {
    assert_eq!(harmony("temur"), "тэмүр");
    assert_eq!(tr("temur"), "тэмур");
}

#[test]
fn test_harmony_back_token_unchanged() {
    assert_eq!(harmony("tomor"), "томор");
}

#[test]
fn test_harmony_is_per_token() {
    assert_eq!(harmony("tomor tomor"), "томор томор");
    assert_eq!(harmony("tomor teg"), "томор тэг");
    assert_eq!(harmony("ger nom"), "гэр ном");
    assert_eq!(harmony("nome"), "нөмэ");
}

#[test]
fn test_harmony_keeps_context_rule() {
    assert_eq!(harmony("oi"), "өй");
    assert_eq!(harmony("Ui"), "Үй");
}

// --- Cache ---

#[test]
fn test_cache_transparency() {
    let first = tr("cache transparency check");
    let second = tr("cache transparency check");
    assert_eq!(first, second);
    let uncached = transliterate_with(
        Scheme::global(),
        "cache transparency check",
        TransliterationOptions::default(),
    );
    assert_eq!(first, uncached);
}

#[test]
fn test_cache_bounded() {
    for i in 0..(cache_capacity() + 200) {
        tr(&format!("bound{i}"));
    }
    assert!(cache_len() <= cache_capacity());
}

#[test]
fn test_options_do_not_share_cache_entries() {
    assert_eq!(tr("nom e"), "ном э");
    assert_eq!(harmony("nom e"), "ном э");
    assert_eq!(tr("nome"), "номэ");
    assert_eq!(harmony("nome"), "нөмэ");
}

// --- Custom scheme ---

#[test]
fn test_custom_scheme() {
    let scheme = Scheme::from_toml(
        r#"
[multigraphs]
zh = "ж"

[singles]
z = "з"
a = "а"
"#,
    )
    .unwrap();
    let opts = TransliterationOptions::default();
    assert_eq!(transliterate_with(&scheme, "Zhaza", opts), "Жаза");
    assert_eq!(transliterate_with(&scheme, "b", opts), "b");
}

#[test]
fn test_configured_options_follow_settings() {
    assert_eq!(
        TransliterationOptions::configured(),
        TransliterationOptions::default()
    );
    assert_eq!(transliterate_default("Bayar"), "Баяр");
}
