//! Character-level Unicode classification used by segmentation and dictionary parsing.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Titlecase letters (general category Lt), e.g. `ǅ` or `ᾈ`.
///
/// `char` has no titlecase predicate; the category is small and stable, so
/// it is listed here as ranges.
pub fn is_titlecase(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// True when the first character of `s` is an uppercase letter.
///
/// Digits and symbols are neither upper nor lower case.
pub fn starts_uppercase(s: &str) -> bool {
    s.chars().next().is_some_and(char::is_uppercase)
}

/// Check if a string is a hiragana reading, allowing the prolonged sound mark ー.
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hiragana_reading() {
        assert!(is_hiragana_reading("かんじ"));
        assert!(is_hiragana_reading("らーめん"));
        assert!(!is_hiragana_reading("カタカナ"));
        assert!(!is_hiragana_reading("おくr"));
        assert!(!is_hiragana_reading(""));
    }

    #[test]
    fn test_titlecase() {
        assert!(is_titlecase('ǅ'));
        assert!(is_titlecase('ᾈ'));
        assert!(!is_titlecase('D'));
        assert!(!is_titlecase('ǆ'));
        assert!(!is_titlecase('あ'));
    }

    #[test]
    fn test_starts_uppercase() {
        assert!(starts_uppercase("Tanaka"));
        assert!(starts_uppercase("Ωmega"));
        assert!(!starts_uppercase("tanaka"));
        assert!(!starts_uppercase("1Tanaka"));
        assert!(!starts_uppercase(""));
    }
}
