//! Global settings loaded from TOML, following the same OnceLock pattern as the scheme.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Hard ceiling for `cache.max_entries`.
pub const MAX_CACHE_ENTRIES_LIMIT: usize = 1 << 20;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub cache: CacheSettings,
    pub transliteration: TransliterationSettings,
    pub editor: EditorSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub max_entries: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransliterationSettings {
    pub preserve_case: bool,
    pub ascii_harmony: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorSettings {
    pub mode: ApplyMode,
}

/// How the word under the cursor is re-transliterated on each edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyMode {
    /// `forward(reverse(word))`: folds already-displayed Cyrillic back into
    /// Latin first so multigraphs typed across keystrokes still combine.
    #[default]
    RoundTrip,
    /// `forward(word)` on the raw word.
    ForwardOnly,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.cache.max_entries > MAX_CACHE_ENTRIES_LIMIT {
        return Err(SettingsError::InvalidValue {
            field: "cache.max_entries".to_string(),
            reason: format!("must be at most {MAX_CACHE_ENTRIES_LIMIT}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_parse() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.cache.max_entries, crate::cache::MAX_CACHE_SIZE);
        assert!(s.transliteration.preserve_case);
        assert!(!s.transliteration.ascii_harmony);
        assert_eq!(s.editor.mode, ApplyMode::RoundTrip);
    }

    #[test]
    fn test_global_settings() {
        assert_eq!(settings().cache.max_entries, 1000);
    }

    #[test]
    fn test_forward_only_mode() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"round_trip\"", "\"forward_only\"");
        let s = parse_settings_toml(&toml).unwrap();
        assert_eq!(s.editor.mode, ApplyMode::ForwardOnly);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"round_trip\"", "\"sideways\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_cache_limit() {
        let toml = DEFAULT_SETTINGS_TOML.replace("max_entries = 1000", "max_entries = 99999999");
        let err = parse_settings_toml(&toml).unwrap_err();
        match err {
            SettingsError::InvalidValue { field, .. } => assert_eq!(field, "cache.max_entries"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_cache_size_rejected() {
        let toml = DEFAULT_SETTINGS_TOML.replace("max_entries = 1000", "max_entries = -1");
        assert!(matches!(
            parse_settings_toml(&toml),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_section() {
        let err = parse_settings_toml("[cache]\nmax_entries = 10\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
