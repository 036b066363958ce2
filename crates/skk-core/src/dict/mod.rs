//! Kana-to-kanji dictionary storage.
//!
//! `SkkDictionary` holds one parsed SKK-JISYO source, split into its
//! okuri-ari and okuri-nasi sections. `CompositeDictionary` searches
//! several sources in the order they were loaded.

mod composite;
mod encoding;
mod entry;
mod skk_dict;
#[cfg(test)]
mod tests;

pub use composite::CompositeDictionary;
pub use encoding::DictEncoding;
pub use entry::{DictEntry, Word};
pub use skk_dict::{LoadStats, Section, SkkDictionary};

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("not valid {0} text")]
    Decode(&'static str),
}

/// The three read-only searches the candidate assembler issues.
///
/// Entries come back in the dictionary's natural order; callers rely on
/// that order for candidate priority.
pub trait Dictionary: Send + Sync {
    /// Exact match in the okuri-ari section (key such as `おくr`).
    fn search_okuri_ari(&self, key: &str) -> Vec<&DictEntry>;

    /// Exact match in the okuri-nasi section.
    fn search_okuri_nasi(&self, key: &str) -> Vec<&DictEntry>;

    /// Every okuri-nasi entry whose reading starts with `prefix`.
    fn search_okuri_nasi_prefix(&self, prefix: &str) -> Vec<&DictEntry>;
}
