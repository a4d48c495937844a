use std::fs;

use kiril_core::scheme::{self, parse_scheme_toml};
use kiril_core::settings;

use super::die;

pub fn scheme_export() {
    print!("{}", scheme::default_toml());
}

pub fn scheme_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let tables = die!(parse_scheme_toml(&content), "Error: {}");
    println!(
        "OK: {} multigraphs, {} singles, {} inverse",
        tables.multigraphs.len(),
        tables.singles.len(),
        tables.inverse.len()
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: cache.max_entries={}, transliteration.preserve_case={}, transliteration.ascii_harmony={}, editor.mode={:?}",
        s.cache.max_entries,
        s.transliteration.preserve_case,
        s.transliteration.ascii_harmony,
        s.editor.mode
    );
}
