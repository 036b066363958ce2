use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, RomajiConfigError};

const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default romaji TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, PartialEq)]
pub enum LookupResult {
    None,
    Prefix,
    Exact(String),
    ExactAndPrefix(String),
}

pub struct RomajiTable {
    map: BTreeMap<String, String>,
}

impl RomajiTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiConfigError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let map = CUSTOM_TOML
                .get()
                .and_then(|s| parse_romaji_toml(s).ok())
                .unwrap_or_else(Self::default_map);
            RomajiTable { map }
        })
    }

    pub fn from_map(map: BTreeMap<String, String>) -> Self {
        Self { map }
    }

    // The embedded table is validated by `parse_default_toml`.
    fn default_map() -> BTreeMap<String, String> {
        parse_romaji_toml(DEFAULT_TOML).unwrap_or_default()
    }

    pub fn lookup(&self, romaji: &str) -> LookupResult {
        let exact = self.map.get(romaji).cloned();
        // Keys sort right after their own prefixes, so the first key greater
        // than `romaji` tells whether any longer mapping extends it.
        let has_children = self
            .map
            .range::<str, _>((Bound::Excluded(romaji), Bound::Unbounded))
            .next()
            .is_some_and(|(k, _)| k.starts_with(romaji));
        match (exact, has_children) {
            (None, false) => LookupResult::None,
            (None, true) => LookupResult::Prefix,
            (Some(kana), false) => LookupResult::Exact(kana),
            (Some(kana), true) => LookupResult::ExactAndPrefix(kana),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
