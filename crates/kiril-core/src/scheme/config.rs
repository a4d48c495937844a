use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::lower_char;

/// Raw tables of a romanization scheme, as read from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeTables {
    pub multigraphs: BTreeMap<String, String>,
    pub singles: BTreeMap<String, String>,
    #[serde(default)]
    pub inverse: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemeConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    EmptyTable(&'static str),
    #[error("[{table}] key {key:?} has the wrong length (expected {expected})")]
    KeyLength {
        table: &'static str,
        key: String,
        expected: &'static str,
    },
    #[error("[{table}] key {key:?} is not lowercase")]
    UppercaseKey { table: &'static str, key: String },
    #[error("[{table}] empty value for key: {key}")]
    EmptyValue { table: &'static str, key: String },
    #[error("scheme already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a scheme TOML document.
pub fn parse_scheme_toml(toml_str: &str) -> Result<SchemeTables, SchemeConfigError> {
    let tables: SchemeTables =
        toml::from_str(toml_str).map_err(|e| SchemeConfigError::Parse(e.to_string()))?;

    if tables.multigraphs.is_empty() {
        return Err(SchemeConfigError::EmptyTable("multigraphs"));
    }
    if tables.singles.is_empty() {
        return Err(SchemeConfigError::EmptyTable("singles"));
    }

    validate_table("multigraphs", &tables.multigraphs, |n| n >= 2, "2 or more chars")?;
    validate_table("singles", &tables.singles, |n| n == 1, "exactly 1 char")?;
    validate_table("inverse", &tables.inverse, |n| n == 1, "exactly 1 char")?;

    Ok(tables)
}

fn validate_table(
    table: &'static str,
    map: &BTreeMap<String, String>,
    len_ok: impl Fn(usize) -> bool,
    expected: &'static str,
) -> Result<(), SchemeConfigError> {
    for (key, value) in map {
        if !len_ok(key.chars().count()) {
            return Err(SchemeConfigError::KeyLength {
                table,
                key: key.clone(),
                expected,
            });
        }
        // Keys are matched against lowercased input.
        if key.chars().any(|c| lower_char(c) != c) {
            return Err(SchemeConfigError::UppercaseKey {
                table,
                key: key.clone(),
            });
        }
        if value.is_empty() {
            return Err(SchemeConfigError::EmptyValue {
                table,
                key: key.clone(),
            });
        }
    }
    Ok(())
}
