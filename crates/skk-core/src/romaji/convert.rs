use super::table::{LookupResult, RomajiTable};

/// Punctuation normalized after kana conversion.
static PUNCTUATION: &[(char, char)] = &[('.', '。'), (',', '、')];

pub struct RomajiConvertResult {
    pub composed_kana: String,
    pub pending_romaji: String,
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn normalize_punctuation(s: &str) -> String {
    s.chars()
        .map(|c| {
            PUNCTUATION
                .iter()
                .find(|&&(from, _)| from == c)
                .map_or(c, |&(_, to)| to)
        })
        .collect()
}

/// Convert a whole romaji run to hiragana.
///
/// Ambiguous input is resolved (a trailing `n` becomes ん) and characters
/// without a mapping are copied through, so the result is total.
pub fn to_hiragana(romaji: &str) -> String {
    let r = convert_romaji("", romaji, true);
    normalize_punctuation(&r.composed_kana)
}

/// Convert a trimmed okuri run into the tail of an okuri-ari key.
///
/// Romaji that cannot yet be resolved stays as ASCII, so `r` stays `r` and
/// `n` stays `n` instead of becoming ん.
pub fn to_okuri_key(romaji: &str) -> String {
    let r = convert_romaji("", romaji, false);
    let mut key = r.composed_kana;
    key.push_str(&r.pending_romaji);
    normalize_punctuation(&key)
}

/// Convert pending romaji to kana, appending to `composed_kana`.
///
/// When `force` is true, ambiguous sequences are resolved immediately
/// (e.g. trailing "n" becomes "ん").
pub fn convert_romaji(
    composed_kana: &str,
    pending_romaji: &str,
    force: bool,
) -> RomajiConvertResult {
    let table = RomajiTable::global();
    let mut composed = composed_kana.to_string();
    let mut pending = pending_romaji.to_string();

    let mut changed = true;
    while !pending.is_empty() && changed {
        changed = false;

        match table.lookup(&pending) {
            LookupResult::Exact(kana) => {
                composed.push_str(&kana);
                pending.clear();
                changed = true;
            }

            LookupResult::ExactAndPrefix(kana) => {
                if force {
                    composed.push_str(&kana);
                    pending.clear();
                    changed = true;
                }
            }

            LookupResult::Prefix => {
                if !force {
                    break;
                }
                handle_no_match(table, &mut composed, &mut pending, force, &mut changed);
            }

            LookupResult::None => {
                handle_no_match(table, &mut composed, &mut pending, force, &mut changed);
            }
        }
    }

    RomajiConvertResult {
        composed_kana: composed,
        pending_romaji: pending,
    }
}

/// Handle the case where `pending` has no full match: try sub-prefix,
/// sokuon/hatsuon detection, or force-drain.
fn handle_no_match(
    table: &RomajiTable,
    composed: &mut String,
    pending: &mut String,
    force: bool,
    changed: &mut bool,
) {
    // Longest sub-prefix first. ExactAndPrefix is taken here even without
    // `force`: the full pending already failed, so nothing longer can match.
    let mut found = false;
    let boundaries: Vec<usize> = pending.char_indices().map(|(i, _)| i).skip(1).collect();
    for &len in boundaries.iter().rev() {
        match table.lookup(&pending[..len]) {
            LookupResult::Exact(kana) | LookupResult::ExactAndPrefix(kana) => {
                composed.push_str(&kana);
                *pending = pending[len..].to_string();
                found = true;
                *changed = true;
                break;
            }
            _ => {}
        }
    }

    if found {
        return;
    }

    let mut chars = pending.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => {
            if first == second && first.is_ascii_alphabetic() && first != 'n' && !is_vowel(first)
            {
                // Sokuon (っ): doubled consonant
                composed.push('っ');
                pending.remove(0);
                *changed = true;
            } else if first == 'n' && !is_vowel(second) && second != 'n' && second != 'y' {
                // Hatsuon (ん): n before non-vowel, non-n, non-y
                composed.push('ん');
                pending.remove(0);
                *changed = true;
            } else if force || !is_romaji_prefix(table, first) {
                composed.push(pending.remove(0));
                *changed = true;
            }
            // else: leave in pending (changed stays false, loop exits)
        }
        (Some(_), None) => {
            if pending.as_str() == "n" {
                if force {
                    composed.push('ん');
                    pending.clear();
                    *changed = true;
                }
                // Unforced, "n" stays pending (could be the start of "na").
            } else {
                composed.push_str(pending);
                pending.clear();
                *changed = true;
            }
        }
        (None, _) => {}
    }
}

/// True when `c` starts some mapping, i.e. it may still become kana.
fn is_romaji_prefix(table: &RomajiTable, c: char) -> bool {
    let mut buf = [0u8; 4];
    !matches!(table.lookup(c.encode_utf8(&mut buf)), LookupResult::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(kana: &str, pending: &str, force: bool) -> RomajiConvertResult {
        convert_romaji(kana, pending, force)
    }

    #[test]
    fn test_basic_ka() {
        let r = convert("", "ka", false);
        assert_eq!(r.composed_kana, "か");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_sokuon_kk() {
        let r = convert("", "kk", false);
        assert_eq!(r.composed_kana, "っ");
        assert_eq!(r.pending_romaji, "k");
    }

    #[test]
    fn test_hatsuon_nk() {
        let r = convert("", "nk", false);
        assert_eq!(r.composed_kana, "ん");
        assert_eq!(r.pending_romaji, "k");
    }

    #[test]
    fn test_n_force() {
        let r = convert("", "n", true);
        assert_eq!(r.composed_kana, "ん");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_n_no_force() {
        let r = convert("", "n", false);
        assert_eq!(r.composed_kana, "");
        assert_eq!(r.pending_romaji, "n");
    }

    #[test]
    fn test_consecutive_kakiku() {
        let r = convert("", "kakiku", false);
        assert_eq!(r.composed_kana, "かきく");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_existing_composed_preserved() {
        let r = convert("あ", "ka", false);
        assert_eq!(r.composed_kana, "あか");
    }

    #[test]
    fn test_mixed_kyouha() {
        let r = convert("", "kyouha", false);
        assert_eq!(r.composed_kana, "きょうは");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_sokuon_kka() {
        let r = convert("", "kka", false);
        assert_eq!(r.composed_kana, "っか");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_invalid_chy_no_force() {
        let r = convert("", "chy", false);
        assert_eq!(r.composed_kana, "");
        assert_eq!(r.pending_romaji, "chy");
    }

    #[test]
    fn test_invalid_chy_force() {
        let r = convert("", "chy", true);
        assert_eq!(r.composed_kana, "chy");
        assert_eq!(r.pending_romaji, "");
    }

    #[test]
    fn test_to_hiragana_whole_words() {
        assert_eq!(to_hiragana("okuru"), "おくる");
        assert_eq!(to_hiragana("kanji"), "かんじ");
        assert_eq!(to_hiragana("gakkou"), "がっこう");
        assert_eq!(to_hiragana("tanaka"), "たなか");
        assert_eq!(to_hiragana("shinbun"), "しんぶん");
    }

    #[test]
    fn test_to_hiragana_passes_unmapped_through() {
        assert_eq!(to_hiragana("Tanaka"), "Tあなか");
        assert_eq!(to_hiragana("abc123"), "あbc123");
    }

    #[test]
    fn test_to_hiragana_punctuation() {
        assert_eq!(to_hiragana("hai."), "はい。");
        assert_eq!(to_hiragana("ee,sou"), "ええ、そう");
    }

    #[test]
    fn test_to_okuri_key_keeps_consonant() {
        assert_eq!(to_okuri_key("r"), "r");
        assert_eq!(to_okuri_key("n"), "n");
        assert_eq!(to_okuri_key("k"), "k");
        assert_eq!(to_okuri_key("jir"), "じr");
    }

    #[test]
    fn test_non_ascii_passthrough() {
        assert_eq!(to_hiragana("あka"), "あか");
    }
}
