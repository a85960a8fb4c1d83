//! stage/combine.rs – merges refined runs into final tokens.
//!
//! A single forward pass. At each position a [`Cursor`] starts with the run
//! under it, and seven rules run in a fixed order, each free to consume the
//! next run:
//!
//! 1. kanji stem + hiragana inflection (`開発` + `した`)
//! 2. katakana + `な` (`スマート` + `な`)
//! 3. number + unit, then punctuation, then hiragana (`720` + `ノット` + `、` + `なお`)
//! 4. opening bracket up to and including the first closing bracket
//! 5. trailing particle (`チーム` + `から`)
//! 6. `でも` + negation (`でも` + `ない`)
//! 7. trailing punctuation
//!
//! Each rule re-checks its condition against the accumulator left by the
//! previous ones, so several can fire for one starting position. The order is
//! load-bearing: rule 5 skips `でも` after a closing bracket so that rule 6
//! sees it at the next position instead.

use crate::particle::ParticleTrie;
use crate::patterns::{
    is_close_bracket_token, is_hiragana_run, is_independent_word, is_kanji_run, is_katakana_run,
    is_number, is_number_suffix, is_open_bracket_token, is_punctuation_run, is_unit,
    starts_with_negation,
};
use crate::unicode::is_close_bracket;

/// Immutable view over a run sequence: the accumulated value spans the runs
/// from the starting position up to `pos` inclusive.
///
/// `runs` must concatenate to `text`; the accumulator is then always a
/// contiguous slice of `text` and is tracked as a byte range.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t, 'a> {
    text: &'a str,
    runs: &'t [&'a str],
    pos: usize,
    start: usize,
    end: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    /// Cursor on `runs[index]`, which begins at byte `offset` of `text`.
    pub fn new(text: &'a str, runs: &'t [&'a str], index: usize, offset: usize) -> Self {
        Self {
            text,
            runs,
            pos: index,
            start: offset,
            end: offset + runs[index].len(),
        }
    }

    #[inline]
    pub fn value(&self) -> &'a str {
        &self.text[self.start..self.end]
    }

    /// Index of the last consumed run.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Byte offset just past the accumulated value.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn peek(&self) -> Option<&'a str> {
        self.runs.get(self.pos + 1).copied()
    }

    #[inline]
    fn next_is(&self, pred: impl FnOnce(&str) -> bool) -> bool {
        self.peek().is_some_and(pred)
    }

    /// Append the next run, if any.
    #[must_use]
    #[inline]
    pub fn combine(self) -> Self {
        match self.peek() {
            Some(next) => Self {
                pos: self.pos + 1,
                end: self.end + next.len(),
                ..self
            },
            None => self,
        }
    }

    #[must_use]
    #[inline]
    pub fn combine_if(self, cond: bool) -> Self {
        if cond { self.combine() } else { self }
    }

    #[must_use]
    pub fn combine_while(self, pred: impl Fn(&str) -> bool) -> Self {
        let mut cursor = self;
        while cursor.next_is(&pred) {
            cursor = cursor.combine();
        }
        cursor
    }
}

/// Merge `runs` (which concatenate to `text`) into final tokens.
pub fn combine<'a>(text: &'a str, runs: &[&'a str], trie: &ParticleTrie) -> Vec<&'a str> {
    let mut out = Vec::with_capacity(runs.len());
    let mut index = 0;
    let mut offset = 0;

    while index < runs.len() {
        let cursor = Cursor::new(text, runs, index, offset);
        let cursor = attach_inflection(cursor, trie);
        let cursor = attach_katakana_na(cursor);
        let cursor = attach_unit(cursor);
        let cursor = enclose_brackets(cursor);
        let cursor = attach_particle(cursor, trie);
        let cursor = attach_negation(cursor);
        let cursor = attach_punctuation(cursor);

        out.push(cursor.value());
        index = cursor.pos() + 1;
        offset = cursor.end();
    }

    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Rules, in application order
// ─────────────────────────────────────────────────────────────────────────────

/// Rule 1: a kanji stem swallows the hiragana runs after it.
///
/// Stops before an independent noun (`こと`, `もの`, …) or a multi-character
/// particle starter, and ends right after punctuation.
fn attach_inflection<'t, 'a>(cursor: Cursor<'t, 'a>, trie: &ParticleTrie) -> Cursor<'t, 'a> {
    if !(is_kanji_run(cursor.value()) && cursor.next_is(is_hiragana_run)) {
        return cursor;
    }

    let mut cursor = cursor;
    while let Some(next) = cursor.peek().filter(|run| is_hiragana_run(run)) {
        if is_independent_word(next) || (trie.is_starter(next) && next.chars().count() > 1) {
            break;
        }
        cursor = cursor.combine();
        if cursor.next_is(is_punctuation_run) {
            cursor = cursor.combine();
            break;
        }
    }
    cursor
}

/// Rule 2
fn attach_katakana_na<'t, 'a>(cursor: Cursor<'t, 'a>) -> Cursor<'t, 'a> {
    let cond = is_katakana_run(cursor.value()) && cursor.peek() == Some("な");
    cursor.combine_if(cond)
}

/// Rule 3: `1万`, `50%`, `720ノット、なお`.
fn attach_unit<'t, 'a>(cursor: Cursor<'t, 'a>) -> Cursor<'t, 'a> {
    if !(is_number(cursor.value()) && cursor.next_is(|run| is_unit(run) || is_number_suffix(run))) {
        return cursor;
    }
    let cursor = cursor.combine();
    let cursor = cursor.combine_if(cursor.next_is(is_punctuation_run));
    cursor.combine_if(cursor.next_is(is_hiragana_run))
}

/// Rule 4: no depth tracking, the first closer ends the span.
fn enclose_brackets<'t, 'a>(cursor: Cursor<'t, 'a>) -> Cursor<'t, 'a> {
    if !is_open_bracket_token(cursor.value()) {
        return cursor;
    }
    cursor
        .combine_while(|run| !is_close_bracket_token(run))
        .combine()
}

/// Rule 5
fn attach_particle<'t, 'a>(cursor: Cursor<'t, 'a>, trie: &ParticleTrie) -> Cursor<'t, 'a> {
    let value = cursor.value();
    let cond = cursor.next_is(|next| {
        trie.is_particle(next) && !trie.is_particle(value) && !defers_to_negation(value, next)
    });
    cursor.combine_if(cond)
}

/// `「あれ」でもない`: the でも waits for rule 6 at its own position.
#[inline]
fn defers_to_negation(value: &str, next: &str) -> bool {
    next == "でも" && value.chars().next_back().is_some_and(is_close_bracket)
}

/// Rule 6
fn attach_negation<'t, 'a>(cursor: Cursor<'t, 'a>) -> Cursor<'t, 'a> {
    if !(cursor.value() == "でも" && cursor.next_is(starts_with_negation)) {
        return cursor;
    }
    let cursor = cursor.combine();
    cursor.combine_if(cursor.next_is(is_punctuation_run))
}

/// Rule 7
fn attach_punctuation<'t, 'a>(cursor: Cursor<'t, 'a>) -> Cursor<'t, 'a> {
    let cond = cursor.next_is(is_punctuation_run) && !is_punctuation_run(cursor.value());
    cursor.combine_if(cond)
}
