// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

//! Kiril: Latin ↔ Mongolian Cyrillic transliteration for text editors.
//!
//! Re-exports the Rust API of `kiril-core` and `kiril-editor` and exposes a
//! C ABI (`kiril_*`) for hosts that embed the engine as a static or dynamic
//! library.

pub mod ffi;
pub mod trace_init;

pub use ffi::*;

pub use kiril_core::cache::{cache_capacity, cache_len, MAX_CACHE_SIZE};
pub use kiril_core::scheme::SchemeConfigError;
pub use kiril_core::settings::SettingsError;
pub use kiril_core::{
    list_mappings, reverse_transliterate, transliterate, transliterate_default, ApplyMode,
    MappingEntry, Scheme, TransliterationOptions,
};
pub use kiril_editor::{apply_at_cursor, apply_at_cursor_with, EditResult, EditSession};

/// Install a custom scheme TOML. Must run before the first transliteration.
pub fn init_scheme(toml_content: String) -> Result<(), SchemeConfigError> {
    Scheme::init_custom(toml_content)
}

/// Install custom settings TOML. Must run before the first transliteration.
pub fn init_settings(toml_content: String) -> Result<(), SettingsError> {
    kiril_core::settings::init_custom(toml_content)
}
