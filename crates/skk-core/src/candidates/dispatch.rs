//! Decide which dictionary searches a request needs, and in what order.

use tracing::debug;

use super::segment::{trim_trailing_vowel, SegmentedRequest, Shape};
use crate::dict::{DictEntry, Dictionary};
use crate::romaji::{to_hiragana, to_okuri_key};
use crate::settings::{CandidateSettings, PrefixSearch};
use crate::unicode::{is_titlecase, starts_uppercase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// `key` is stem kana plus the okuri consonant; `okuri` is the kana
    /// appended to every word found.
    OkuriAri { key: String, okuri: String },
    OkuriNasi { key: String },
    /// Raw input line, case preserved.
    Prefix { key: String },
}

impl Query {
    pub fn key(&self) -> &str {
        match self {
            Query::OkuriAri { key, .. } | Query::OkuriNasi { key } | Query::Prefix { key } => key,
        }
    }

    pub fn search<'d>(&self, dict: &'d dyn Dictionary) -> Vec<&'d DictEntry> {
        match self {
            Query::OkuriAri { key, .. } => dict.search_okuri_ari(key),
            Query::OkuriNasi { key } => dict.search_okuri_nasi(key),
            Query::Prefix { key } => dict.search_okuri_nasi_prefix(key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Lookup(Query),
    /// The plain hiragana transliteration as a candidate of its own.
    Reading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub steps: Vec<Step>,
    /// Hiragana of the whole lowercased line.
    pub reading: String,
}

/// Okuri-ari search key: stem kana followed by the trimmed okuri.
///
/// `("Oku", "R")` gives `おくr`.
pub fn okuri_ari_key(stem: &[&str], trimmed_okuri: &str) -> String {
    let mut key: String = stem
        .iter()
        .map(|run| to_hiragana(&run.to_lowercase()))
        .collect();
    key.push_str(&to_okuri_key(&trimmed_okuri.to_lowercase()));
    key
}

/// Build the ordered list of steps for one input line.
///
/// The run shape picks okuri-ari or okuri-nasi first. An uppercase-first
/// line then adds a prefix search on the raw line followed by the reading;
/// otherwise the reading comes next, followed by a prefix search only when
/// configured to always run one.
pub fn plan(line: &str, request: &SegmentedRequest<'_>, settings: &CandidateSettings) -> Plan {
    let reading = to_hiragana(&line.to_lowercase());
    let mut steps = Vec::new();

    match (request.shape(), request.okuri) {
        (Shape::OkuriAri, Some(okuri)) => {
            let key = okuri_ari_key(&request.stem, trim_trailing_vowel(okuri));
            let okuri = to_hiragana(&okuri.to_lowercase());
            debug!(%key, %okuri, "okuri-ari lookup");
            steps.push(Step::Lookup(Query::OkuriAri { key, okuri }));
        }
        (Shape::OkuriNasi, _) => {
            debug!(key = %reading, "okuri-nasi lookup");
            steps.push(Step::Lookup(Query::OkuriNasi {
                key: reading.clone(),
            }));
        }
        _ => {}
    }

    let prefix_query = || Step::Lookup(Query::Prefix {
        key: line.to_string(),
    });

    if starts_uppercase(line) {
        if settings.prefix_search != PrefixSearch::Never {
            steps.push(prefix_query());
        }
        steps.push(Step::Reading);
    } else {
        if !reading.chars().any(is_titlecase) {
            steps.push(Step::Reading);
        }
        if settings.prefix_search == PrefixSearch::Always {
            steps.push(prefix_query());
        }
    }

    Plan { steps, reading }
}
