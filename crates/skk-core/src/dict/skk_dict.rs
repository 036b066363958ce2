use std::collections::BTreeMap;
use std::fs;
use std::ops::Bound;
use std::path::Path;

use tracing::{debug, info};

use super::{DictEncoding, DictEntry, DictError, Dictionary, Word};
use crate::unicode::is_hiragana_reading;

const OKURI_ARI_MARKER: &str = "okuri-ari entries";
const OKURI_NASI_MARKER: &str = "okuri-nasi entries";

/// Which half of an SKK-JISYO file an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    OkuriAri,
    OkuriNasi,
}

impl Section {
    /// Section for a reading found before any `;; okuri-... entries.` marker.
    ///
    /// Okuri-ari readings are kana followed by one ASCII consonant (`おくr`).
    fn guess(reading: &str) -> Section {
        let mut chars = reading.chars();
        match chars.next_back() {
            Some(last) if last.is_ascii_lowercase() && is_hiragana_reading(chars.as_str()) => {
                Section::OkuriAri
            }
            _ => Section::OkuriNasi,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub lines: usize,
    pub entries: usize,
    pub skipped: usize,
}

#[derive(Debug, Default)]
pub struct SkkDictionary {
    okuri_ari: BTreeMap<String, DictEntry>,
    okuri_nasi: BTreeMap<String, DictEntry>,
}

impl SkkDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read and parse a dictionary file.
    pub fn open(path: &Path, encoding: DictEncoding) -> Result<Self, DictError> {
        let raw = fs::read(path)?;
        let text = encoding.decode(&raw)?;
        let mut dict = Self::new();
        let stats = dict.load_str(&text);
        let (ari, nasi) = dict.stats();
        info!(
            path = %path.display(),
            okuri_ari = ari,
            okuri_nasi = nasi,
            skipped = stats.skipped,
            "loaded dictionary"
        );
        Ok(dict)
    }

    /// Parse SKK-JISYO text and merge it into this dictionary.
    ///
    /// Lines that are not entries are skipped and counted.
    pub fn load_str(&mut self, text: &str) -> LoadStats {
        let mut stats = LoadStats::default();
        let mut section: Option<Section> = None;

        for line in text.lines() {
            stats.lines += 1;
            if let Some(comment) = line.strip_prefix(';') {
                if comment.contains(OKURI_ARI_MARKER) {
                    section = Some(Section::OkuriAri);
                } else if comment.contains(OKURI_NASI_MARKER) {
                    section = Some(Section::OkuriNasi);
                }
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }

            let Some((reading, words)) = parse_line(line) else {
                debug!(line = stats.lines, "skipping malformed dictionary line");
                stats.skipped += 1;
                continue;
            };
            let section = section.unwrap_or_else(|| Section::guess(reading));
            self.insert(section, reading, words);
            stats.entries += 1;
        }

        stats
    }

    /// Append words to a reading, keeping the first occurrence of each text.
    pub fn insert(&mut self, section: Section, reading: &str, words: Vec<Word>) {
        let map = match section {
            Section::OkuriAri => &mut self.okuri_ari,
            Section::OkuriNasi => &mut self.okuri_nasi,
        };
        let entry = map
            .entry(reading.to_string())
            .or_insert_with(|| DictEntry {
                reading: reading.to_string(),
                words: Vec::new(),
            });
        for word in words {
            if !entry.words.iter().any(|w| w.text == word.text) {
                entry.words.push(word);
            }
        }
    }

    /// Returns (okuri_ari_readings, okuri_nasi_readings).
    pub fn stats(&self) -> (usize, usize) {
        (self.okuri_ari.len(), self.okuri_nasi.len())
    }
}

impl Dictionary for SkkDictionary {
    fn search_okuri_ari(&self, key: &str) -> Vec<&DictEntry> {
        self.okuri_ari.get(key).into_iter().collect()
    }

    fn search_okuri_nasi(&self, key: &str) -> Vec<&DictEntry> {
        self.okuri_nasi.get(key).into_iter().collect()
    }

    fn search_okuri_nasi_prefix(&self, prefix: &str) -> Vec<&DictEntry> {
        if prefix.is_empty() {
            return Vec::new();
        }
        self.okuri_nasi
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(|(reading, _)| reading.starts_with(prefix))
            .map(|(_, entry)| entry)
            .collect()
    }
}

/// Split `reading /cand1/cand2;note/` into the reading and its words.
fn parse_line(line: &str) -> Option<(&str, Vec<Word>)> {
    let (reading, rest) = line.split_once(' ')?;
    let rest = rest.trim_start_matches(' ');
    if reading.is_empty() || !rest.starts_with('/') {
        return None;
    }

    let mut words = Vec::new();
    let mut in_okuri_block = false;
    for field in rest.split('/') {
        // `[る/送/]` repeats candidates per okuri kana
        if in_okuri_block {
            in_okuri_block = field != "]";
            continue;
        }
        if field.starts_with('[') {
            in_okuri_block = true;
            continue;
        }
        if field.is_empty() {
            continue;
        }
        words.push(parse_word(field));
    }

    if words.is_empty() {
        return None;
    }
    Some((reading, words))
}

fn parse_word(field: &str) -> Word {
    let (text, annotation) = match field.split_once(';') {
        Some((text, note)) => (text, Some(note)),
        None => (field, None),
    };
    Word {
        text: decode_concat(text).unwrap_or_else(|| text.to_string()),
        annotation: annotation.map(|a| decode_concat(a).unwrap_or_else(|| a.to_string())),
    }
}

/// Decode `(concat "ab\057c")`, the escape SKK uses for `/` and `;` inside
/// candidates. Returns `None` for anything that is not a well-formed concat.
fn decode_concat(s: &str) -> Option<String> {
    let body = s.strip_prefix("(concat")?.strip_suffix(')')?;
    let mut out = String::new();
    let mut chars = body.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        match chars.next() {
            None => break,
            Some('"') => {}
            Some(_) => return None,
        }
        loop {
            match chars.next()? {
                '"' => break,
                '\\' => match chars.next()? {
                    d @ '0'..='7' => {
                        let mut code = d.to_digit(8)?;
                        for _ in 0..2 {
                            match chars.next_if(|c| ('0'..='7').contains(c)) {
                                Some(d) => code = code * 8 + d.to_digit(8)?,
                                None => break,
                            }
                        }
                        out.push(char::from_u32(code)?);
                    }
                    'n' => out.push('\n'),
                    other => out.push(other),
                },
                c => out.push(c),
            }
        }
    }

    Some(out)
}
