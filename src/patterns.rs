//! Compiled patterns and whole-token predicates.
//!
//! * `CLASSIFIER` – the ordered alternation that cuts raw text into runs
//! * script predicates (`is_kanji_run`, `is_hiragana_run`, `is_katakana_run`)
//!   share the exact character classes the classifier uses
//! * numeral / unit / negation / independent-word lookups used by the combiner
//!
//! Every regex is compiled once per process on first use.

use crate::unicode::{
    all_chars, is_close_bracket, is_digit, is_kanji_numeral, is_open_bracket, is_punctuation,
    single_char,
};
use phf::{Set, phf_set};
use regex::Regex;
use std::sync::LazyLock;

/// Source of the run classifier. Alternatives are tried in order at each
/// position; the last one accepts any single character, so the scan is
/// exhaustive.
const CLASSIFIER_SOURCE: &str = concat!(
    // literal non-breaking-space entity
    "&nbsp;",
    r"|\s+",
    // numerals with `.`/`,` group or decimal separators
    r"|[0-9０-９]+(?:[.,][0-9０-９]+)*",
    // latin alphanumerics, keeping `example.com`-like suffixes whole
    r"|[A-Za-z0-9]+(?:\.[A-Za-z]{2,})?",
    r"|[\p{Script=Katakana}ー]+",
    r"|\p{Script=Hiragana}+",
    r"|[\p{Script=Han}々〆ヵヶゝ]+",
    // one bracket at a time
    r"|[〈《「『｢（\[(【〔〚〖〘❮❬❪❨<｛{❲❰〉》」』｣）\])】〕〗〙〛❩❫❭❯❱❳❵｝}]",
    r"|[。、．….!！?？,，:：;；]+",
    r"|[%％‰‱㌫]",
    r"|[\p{Emoji_Presentation}\p{Emoji}\x{1F000}-\x{1F9FF}\x{2600}-\x{26FF}\x{2700}-\x{27BF}]",
    r"|(?s:.)",
);

pub(crate) static CLASSIFIER: LazyLock<Regex> = LazyLock::new(|| compile(CLASSIFIER_SOURCE));

static KANJI_RUN: LazyLock<Regex> = LazyLock::new(|| compile(r"\A[\p{Script=Han}々〆ヵヶゝ]+"));
static KANJI_TOKEN: LazyLock<Regex> = LazyLock::new(|| compile(r"\A[\p{Script=Han}々〆ヵヶゝ]+\z"));
static KATAKANA_TOKEN: LazyLock<Regex> = LazyLock::new(|| compile(r"\A[\p{Script=Katakana}ー]+\z"));
static HIRAGANA_TOKEN: LazyLock<Regex> = LazyLock::new(|| compile(r"\A\p{Script=Hiragana}+\z"));

/// Units that may follow a number. Matched case-insensitively and whole.
pub const UNITS: &[&str] = &[
    "px", "point", "pt", "pc", "dpi", "dppx", //
    "mm", "cm", "m", "km", "μm", "nm", "センチメートル", "キロ", "メートル", //
    "inch", "in", "ft", "yd", "mile", "knot", "ノット", //
    "g", "kg", "t", "mg", "μg", "ℊ", "グラム", "キログラム", "トン", //
    "l", "ml", "ℓ", "リットル", //
    "s", "ms", "sec", "秒", "分", "min", "h", "hr", "時間", //
    "Hz", "kHz", "MHz", "GHz", //
    "A", "mA", "V", "kV", "W", "kW", "Wh", "kWh", //
    "B", "KB", "MB", "GB", "TB", "KiB", "MiB", "GiB", //
    "¥", "円", "￥", "$", "＄", "€", "€\u{200E}", "£", "₩", "元", //
    "%", "％", "‰", "‱", "㌫", //
    "°", "℃", "℉", "度", //
    "個", "本", "冊", "枚", "台", "箱", "匹", "人", "里", "海里", "畳", "坪",
];

static UNIT: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = UNITS.iter().map(|u| regex::escape(u)).collect::<Vec<_>>().join("|");
    compile(&format!(r"(?i)\A(?:{alternation})\z"))
});

/// Nouns that stay separate even right after a kanji stem.
pub static INDEPENDENT_WORDS: Set<&'static str> = phf_set! {
    "こと", "もの", "ため", "ところ", "わけ",
};

/// Negation heads that complete a preceding 「でも」.
pub const NEGATION_HEADS: &[&str] = &["ない", "なく", "なかっ", "なけれ"];

pub const NUMBER_SUFFIX: &str = "万";

fn compile(source: &str) -> Regex {
    Regex::new(source).expect("built-in pattern failed to compile – this is a bug")
}

/// Byte length of the maximal kanji-class run at the start of `text` (0 if none).
#[inline]
pub fn kanji_run_len(text: &str) -> usize {
    KANJI_RUN.find(text).map_or(0, |m| m.end())
}

#[inline]
pub fn is_kanji_run(token: &str) -> bool {
    KANJI_TOKEN.is_match(token)
}

#[inline]
pub fn is_hiragana_run(token: &str) -> bool {
    HIRAGANA_TOKEN.is_match(token)
}

/// Katakana run, prolonged-sound mark included.
#[inline]
pub fn is_katakana_run(token: &str) -> bool {
    KATAKANA_TOKEN.is_match(token)
}

#[inline]
pub fn is_punctuation_run(token: &str) -> bool {
    all_chars(token, is_punctuation)
}

#[inline]
pub fn is_open_bracket_token(token: &str) -> bool {
    single_char(token).is_some_and(is_open_bracket)
}

#[inline]
pub fn is_close_bracket_token(token: &str) -> bool {
    single_char(token).is_some_and(is_close_bracket)
}

/// Digit groups joined by single `.`/`,` separators (`1,000.5`, `３２`), or a
/// run of kanji numerals (`三千`).
pub fn is_number(token: &str) -> bool {
    if all_chars(token, is_kanji_numeral) {
        return true;
    }
    !token.is_empty()
        && token
            .split(['.', ','])
            .all(|group| all_chars(group, is_digit))
}

#[inline]
pub fn is_unit(token: &str) -> bool {
    UNIT.is_match(token)
}

#[inline]
pub fn is_number_suffix(token: &str) -> bool {
    token == NUMBER_SUFFIX
}

#[inline]
pub fn is_independent_word(token: &str) -> bool {
    INDEPENDENT_WORDS.contains(token)
}

#[inline]
pub fn starts_with_negation(text: &str) -> bool {
    NEGATION_HEADS.iter().any(|head| text.starts_with(head))
}
