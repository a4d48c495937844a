//! Latin ↔ Mongolian Cyrillic transliteration.
//!
//! - [`forward`]: Latin → Cyrillic, longest match first, memoized in [`cache`]
//! - [`reverse`]: Cyrillic → canonical Latin, one char at a time
//! - [`scheme`]: the mapping tables, loaded from TOML

pub mod cache;
pub mod forward;
pub mod reverse;
pub mod scheme;
pub mod settings;
pub mod unicode;

#[cfg(test)]
mod tests;

pub use forward::{transliterate, transliterate_default, transliterate_with, TransliterationOptions};
pub use reverse::{reverse_transliterate, reverse_transliterate_with};
pub use scheme::{list_mappings, MappingEntry, Scheme};
pub use settings::ApplyMode;
