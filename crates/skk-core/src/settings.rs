//! Global settings loaded from TOML, following the same OnceLock pattern as the romaji table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::dict::DictEncoding;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

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
        CUSTOM_TOML
            .get()
            .and_then(|s| parse_settings_toml(s).ok())
            .unwrap_or_default()
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

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub candidates: CandidateSettings,
    #[serde(default)]
    pub dictionary: DictionarySettings,
}

/// When the raw line is also used as an okuri-nasi prefix search key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefixSearch {
    #[default]
    Uppercase,
    Always,
    Never,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateSettings {
    #[serde(default)]
    pub prefix_search: PrefixSearch,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for CandidateSettings {
    fn default() -> Self {
        Self {
            prefix_search: PrefixSearch::default(),
            max_results: default_max_results(),
        }
    }
}

fn default_max_results() -> usize {
    500
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DictionarySettings {
    #[serde(default)]
    pub encoding: DictEncoding,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.candidates.max_results == 0 {
        return Err(SettingsError::InvalidValue {
            field: "candidates.max_results".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}
