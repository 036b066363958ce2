//! Case-run segmentation and stem/okuri splitting.
//!
//! SKK marks the start of a conversion and the start of the okuri with an
//! upper-case letter: `aiKanJiru` is the converted prefix `ai`, the stem
//! `Kan` and the okuri `Jiru`.

use crate::romaji::to_hiragana;
use crate::unicode::starts_uppercase;

/// Split `line` wherever a lowercase letter is directly followed by an
/// uppercase letter.
///
/// The runs concatenate back to `line`. Digits and symbols are neither
/// case and never cause a cut.
pub fn segment(line: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (i, c) in line.char_indices() {
        if prev.is_some_and(char::is_lowercase) && c.is_uppercase() {
            runs.push(&line[start..i]);
            start = i;
        }
        prev = Some(c);
    }
    runs.push(&line[start..]);
    runs
}

/// How the runs left after the converted prefix are looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Every run was lowercase; nothing is left to look up.
    Converted,
    /// One run left: the whole reading is the key.
    OkuriNasi,
    /// Stem runs followed by an okuri run.
    OkuriAri,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedRequest<'a> {
    /// Hiragana of the leading runs that do not start with an uppercase letter.
    pub prefix: String,
    /// Conjugation stem (okuri-ari) or the single remaining run (okuri-nasi).
    pub stem: Vec<&'a str>,
    /// Final run when more than one run follows the prefix.
    pub okuri: Option<&'a str>,
}

impl SegmentedRequest<'_> {
    pub fn shape(&self) -> Shape {
        match (self.stem.is_empty(), self.okuri) {
            (_, Some(_)) => Shape::OkuriAri,
            (false, None) => Shape::OkuriNasi,
            (true, None) => Shape::Converted,
        }
    }
}

/// Peel the already-converted prefix off `runs` and split the rest into
/// stem and okuri.
pub fn split_stem_okuri<'a>(runs: &[&'a str]) -> SegmentedRequest<'a> {
    let first_upper = runs
        .iter()
        .position(|run| starts_uppercase(run))
        .unwrap_or(runs.len());
    let (converted, remaining) = runs.split_at(first_upper);
    let prefix = converted.iter().map(|run| to_hiragana(run)).collect();

    match remaining.split_last() {
        Some((&okuri, stem)) if !stem.is_empty() => SegmentedRequest {
            prefix,
            stem: stem.to_vec(),
            okuri: Some(okuri),
        },
        _ => SegmentedRequest {
            prefix,
            stem: remaining.to_vec(),
            okuri: None,
        },
    }
}

/// Drop one trailing romaji vowel: `Ru` → `R`, `Ki` → `K`, `N` → `N`.
///
/// SKK okuri-ari keys end with the consonant of the okuri, not its kana.
pub fn trim_trailing_vowel(run: &str) -> &str {
    match run.char_indices().next_back() {
        Some((i, 'a' | 'i' | 'u' | 'e' | 'o')) => &run[..i],
        _ => run,
    }
}
