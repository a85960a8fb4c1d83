// Character-level predicates used by the segmentation passes.
//
// Script membership (Han, Hiragana, Katakana) is answered by the compiled
// patterns in `crate::patterns`, so both the classifier and the combiner agree
// on the same Unicode tables. Everything here is a small fixed set.

/// Opening brackets. A single one of these starts a bracketed span.
#[inline(always)]
pub const fn is_open_bracket(c: char) -> bool {
    matches!(
        c,
        '〈' | '《'
            | '「'
            | '『'
            | '｢'
            | '（'
            | '['
            | '('
            | '【'
            | '〔'
            | '〚'
            | '〖'
            | '〘'
            | '❮'
            | '❬'
            | '❪'
            | '❨'
            | '<'
            | '｛'
            | '{'
            | '❲'
            | '❰'
    )
}

/// Closing brackets. The first one met ends a bracketed span; nesting is not tracked.
#[inline(always)]
pub const fn is_close_bracket(c: char) -> bool {
    matches!(
        c,
        '〉' | '》'
            | '」'
            | '』'
            | '｣'
            | '）'
            | ']'
            | ')'
            | '】'
            | '〕'
            | '〗'
            | '〙'
            | '〛'
            | '❩'
            | '❫'
            | '❭'
            | '❯'
            | '❱'
            | '❳'
            | '❵'
            | '｝'
            | '}'
    )
}

/// Sentence and clause punctuation, Japanese and ASCII.
#[inline(always)]
pub const fn is_punctuation(c: char) -> bool {
    matches!(
        c,
        '。' | '、' | '．' | '…' | '.' | '!' | '！' | '?' | '？' | ',' | '，' | ':' | '：' | ';' | '；'
    )
}

#[inline(always)]
pub const fn is_percent_sign(c: char) -> bool {
    matches!(c, '%' | '％' | '‰' | '‱' | '㌫')
}

/// ASCII or fullwidth decimal digit.
#[inline(always)]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(c as u32, 0xFF10..=0xFF19)
}

#[inline(always)]
pub const fn is_kanji_numeral(c: char) -> bool {
    matches!(
        c,
        '〇' | '零' | '一' | '二' | '三' | '四' | '五' | '六' | '七' | '八' | '九' | '十' | '百' | '千'
            | '億'
            | '兆'
            | '京'
    )
}

/// The only character, if `s` is exactly one character long.
#[inline]
pub fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// `true` when `s` is non-empty and every character satisfies `pred`.
#[inline]
pub fn all_chars(s: &str, pred: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_sets_are_disjoint() {
        for c in "〈《「『｢（[(【〔〚〖〘❮❬❪❨<｛{❲❰".chars() {
            assert!(is_open_bracket(c), "{c} should open");
            assert!(!is_close_bracket(c), "{c} should not close");
        }
        for c in "〉》」』｣）])】〕〗〙〛❩❫❭❯❱❳❵｝}".chars() {
            assert!(is_close_bracket(c), "{c} should close");
            assert!(!is_open_bracket(c), "{c} should not open");
        }
    }

    #[test]
    fn digits_cover_fullwidth() {
        assert!(is_digit('7'));
        assert!(is_digit('７'));
        assert!(!is_digit('七'));
        assert!(is_kanji_numeral('七'));
    }

    #[test]
    fn single_char_counts_scalars_not_bytes() {
        assert_eq!(single_char("「"), Some('「'));
        assert_eq!(single_char("「」"), None);
        assert_eq!(single_char(""), None);
    }

    #[test]
    fn all_chars_rejects_empty() {
        assert!(!all_chars("", is_punctuation));
        assert!(all_chars("。、", is_punctuation));
        assert!(!all_chars("。a", is_punctuation));
    }
}
