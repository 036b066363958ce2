//! SKK-style kana-kanji conversion core.
//!
//! Splits mixed-case romaji into a conjugation stem and okuri, builds SKK
//! dictionary keys, and assembles ordered candidate lists from the
//! okuri-ari, okuri-nasi and prefix searches.

pub mod candidates;
pub mod dict;
pub mod romaji;
pub mod settings;
pub mod unicode;
