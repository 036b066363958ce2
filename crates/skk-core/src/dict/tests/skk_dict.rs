use std::io::Write;

use crate::dict::{DictEncoding, DictError, Dictionary, LoadStats, SkkDictionary, Word};

const SAMPLE: &str = "\
;; -*- mode: fundamental; coding: utf-8 -*-
;; okuri-ari entries.
よm /読/詠/
おくr /送/贈;present/[る/送/贈/]/
かんじr /感/
;; okuri-nasi entries.
かん /缶/管/
かんじ /漢字/感じ/幹事/
かんじょう /感情/勘定/
Tanaka /田中/
Tanakamura /田中村/
";

fn sample_dict() -> SkkDictionary {
    let mut dict = SkkDictionary::new();
    dict.load_str(SAMPLE);
    dict
}

fn texts(entries: Vec<&crate::dict::DictEntry>) -> Vec<&str> {
    entries
        .into_iter()
        .flat_map(|e| e.words.iter().map(|w| w.text.as_str()))
        .collect()
}

#[test]
fn test_load_stats() {
    let mut dict = SkkDictionary::new();
    let stats = dict.load_str(SAMPLE);
    assert_eq!(
        stats,
        LoadStats {
            lines: 11,
            entries: 8,
            skipped: 0
        }
    );
    assert_eq!(dict.stats(), (3, 5));
}

#[test]
fn test_okuri_ari_exact() {
    let dict = sample_dict();
    assert_eq!(texts(dict.search_okuri_ari("おくr")), vec!["送", "贈"]);
    let entry = dict.search_okuri_ari("おくr")[0];
    assert_eq!(entry.words[1], Word::with_annotation("贈", "present"));
    assert!(dict.search_okuri_ari("おく").is_empty());
}

#[test]
fn test_sections_are_separate() {
    let dict = sample_dict();
    assert!(dict.search_okuri_nasi("よm").is_empty());
    assert!(dict.search_okuri_ari("かんじ").is_empty());
}

#[test]
fn test_okuri_nasi_exact_preserves_order() {
    let dict = sample_dict();
    assert_eq!(
        texts(dict.search_okuri_nasi("かんじ")),
        vec!["漢字", "感じ", "幹事"]
    );
}

#[test]
fn test_prefix_search() {
    let dict = sample_dict();
    assert_eq!(
        texts(dict.search_okuri_nasi_prefix("かんじ")),
        vec!["漢字", "感じ", "幹事", "感情", "勘定"]
    );
    assert_eq!(
        texts(dict.search_okuri_nasi_prefix("Tanaka")),
        vec!["田中", "田中村"]
    );
    assert!(dict.search_okuri_nasi_prefix("tanaka").is_empty());
    assert!(dict.search_okuri_nasi_prefix("").is_empty());
}

#[test]
fn test_repeated_reading_merges() {
    let mut dict = sample_dict();
    dict.load_str("かんじ /漢字/監事/\n");
    assert_eq!(
        texts(dict.search_okuri_nasi("かんじ")),
        vec!["漢字", "感じ", "幹事", "監事"]
    );
}

#[test]
fn test_no_markers_guesses_section() {
    let mut dict = SkkDictionary::new();
    dict.load_str("おくr /送/\nあい /愛/\n");
    assert_eq!(texts(dict.search_okuri_ari("おくr")), vec!["送"]);
    assert_eq!(texts(dict.search_okuri_nasi("あい")), vec!["愛"]);
}

#[test]
fn test_malformed_lines_skipped() {
    let mut dict = SkkDictionary::new();
    let stats = dict.load_str("あい /愛/\ngarbage\n\nかん\n");
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.skipped, 2);
}

#[test]
fn test_open_utf8_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    let dict = SkkDictionary::open(file.path(), DictEncoding::Auto).unwrap();
    assert_eq!(dict.stats(), (3, 5));
}

#[test]
fn test_open_euc_jp_file() {
    let (bytes, _, _) = encoding_rs::EUC_JP.encode(";; okuri-nasi entries.\nかんじ /漢字/\n");
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    let dict = SkkDictionary::open(file.path(), DictEncoding::Auto).unwrap();
    assert_eq!(texts(dict.search_okuri_nasi("かんじ")), vec!["漢字"]);
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SkkDictionary::open(&dir.path().join("SKK-JISYO.L"), DictEncoding::Auto)
        .unwrap_err();
    assert!(matches!(err, DictError::Io(_)));
}
