//! Romaji-to-hiragana conversion.
//!
//! A sorted lookup table drives longest-match conversion of ASCII romaji
//! into hiragana, handling sokuon (っ), hatsuon (ん), and yōon (きゃ).
//! Unmapped characters pass through unchanged.

mod config;
mod convert;
mod table;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use convert::{convert_romaji, to_hiragana, to_okuri_key, RomajiConvertResult};
pub use table::{default_toml, LookupResult, RomajiTable};
