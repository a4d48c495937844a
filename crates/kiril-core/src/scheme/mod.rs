//! Romanization scheme: multigraph, single-character and inverse tables.
//!
//! The default scheme is embedded from `default_scheme.toml`. A custom
//! scheme can be installed once with [`Scheme::init_custom`] before the
//! first call to [`Scheme::global`]; after that the tables are immutable for
//! the life of the process.

mod config;
mod trie;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use serde::Serialize;

pub use config::{parse_scheme_toml, SchemeConfigError, SchemeTables};
pub use trie::MultigraphTrie;

pub(crate) const DEFAULT_TOML: &str = include_str!("default_scheme.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default scheme TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// One Latin → Cyrillic rule, as shown in the conversion table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    pub latin: String,
    pub cyrillic: String,
}

pub struct Scheme {
    multigraphs: MultigraphTrie,
    /// Multigraph keys by descending length, then lexicographically.
    multigraph_keys: Vec<(String, String)>,
    singles: HashMap<char, String>,
    inverse: HashMap<char, String>,
}

impl Scheme {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), SchemeConfigError> {
        // Validate eagerly
        parse_scheme_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| SchemeConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Scheme {
        static INSTANCE: OnceLock<Scheme> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let tables = parse_scheme_toml(toml_str).expect("scheme TOML must be valid");
            Scheme::from_tables(&tables)
        })
    }

    /// Build a standalone scheme, bypassing the global singleton.
    pub fn from_toml(toml_str: &str) -> Result<Scheme, SchemeConfigError> {
        parse_scheme_toml(toml_str).map(|tables| Scheme::from_tables(&tables))
    }

    /// Build from already validated tables.
    pub fn from_tables(tables: &SchemeTables) -> Scheme {
        let mut multigraphs = MultigraphTrie::new();
        for (latin, cyrillic) in &tables.multigraphs {
            multigraphs.insert(latin, cyrillic);
        }

        let mut multigraph_keys: Vec<(String, String)> = tables
            .multigraphs
            .iter()
            .map(|(l, c)| (l.clone(), c.clone()))
            .collect();
        multigraph_keys.sort_by(|a, b| by_length_then_key(&a.0, &b.0));

        Scheme {
            multigraphs,
            multigraph_keys,
            singles: single_char_map(&tables.singles),
            inverse: single_char_map(&tables.inverse),
        }
    }

    /// Longest multigraph matching at the start of `lowered`.
    pub fn longest_multigraph(&self, lowered: &[char]) -> Option<(usize, &str)> {
        self.multigraphs.longest_match(lowered)
    }

    pub fn single(&self, lowered: char) -> Option<&str> {
        self.singles.get(&lowered).map(String::as_str)
    }

    /// Canonical Latin spelling for a lowercase Cyrillic char.
    pub fn inverse(&self, lowered: char) -> Option<&str> {
        self.inverse.get(&lowered).map(String::as_str)
    }

    /// Multigraph rules in scan priority order.
    pub fn multigraphs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.multigraph_keys
            .iter()
            .map(|(l, c)| (l.as_str(), c.as_str()))
    }

    pub fn inverse_entries(&self) -> impl Iterator<Item = (char, &str)> {
        self.inverse.iter().map(|(c, l)| (*c, l.as_str()))
    }

    /// Every multigraph and single rule except identity passthroughs
    /// (space, `.`, `,`), sorted by descending Latin length then key.
    pub fn mappings(&self) -> Vec<MappingEntry> {
        let singles = self.singles.iter().map(|(c, cyr)| (c.to_string(), cyr));
        let mut entries: Vec<MappingEntry> = self
            .multigraph_keys
            .iter()
            .map(|(l, c)| (l.clone(), c))
            .chain(singles)
            .filter(|(latin, cyrillic)| latin != *cyrillic)
            .map(|(latin, cyrillic)| MappingEntry {
                latin,
                cyrillic: cyrillic.clone(),
            })
            .collect();
        entries.sort_by(|a, b| by_length_then_key(&a.latin, &b.latin));
        entries
    }
}

fn by_length_then_key(a: &str, b: &str) -> std::cmp::Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

/// Keys were validated to be exactly one char.
fn single_char_map(table: &BTreeMap<String, String>) -> HashMap<char, String> {
    table
        .iter()
        .filter_map(|(k, v)| k.chars().next().map(|c| (c, v.clone())))
        .collect()
}

/// Conversion table of the global scheme.
pub fn list_mappings() -> Vec<MappingEntry> {
    Scheme::global().mappings()
}
