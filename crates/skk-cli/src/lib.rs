//! Line-oriented front-end for the SKK conversion core.
//!
//! Reads romaji lines (plain text or JSON requests) and writes candidate
//! lists, one response per request.

pub mod protocol;
pub mod repl;
pub mod resources;
pub mod trace_init;

use std::io;
use std::path::PathBuf;

use skk_core::dict::DictError;
use skk_core::romaji::RomajiConfigError;
use skk_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to load dictionary {path}: {source}")]
    DictionaryLoad {
        path: PathBuf,
        #[source]
        source: DictError,
    },

    #[error("no dictionary given and no default location (use -d PATH)")]
    NoDictionary,

    #[error("failed to read {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),

    #[error("invalid romaji table: {0}")]
    Romaji(#[from] RomajiConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}
