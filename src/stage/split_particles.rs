//! stage/split_particles.rs – re-splits long hiragana runs on particle boundaries.
//!
//! The classifier leaves `やりたいことのそばにいる` as one hiragana run. This pass
//! walks it left to right, asks the trie for the longest particle at each
//! offset and closes a sub-token right after every accepted particle:
//! `やりたいことの` / `そばに` / `いる`.
//!
//! Two matches are deferred (scan moves on by one character, nothing is cut):
//! * a lone `や` anywhere but the last offset, where it is usually a verb ending
//! * `でも` directly followed by a negation head (`ない`, `なく`, `なかっ`, `なけれ`),
//!   which the combiner later joins into `でもない`

use crate::particle::ParticleTrie;
use crate::patterns::{is_hiragana_run, starts_with_negation};
use smallvec::SmallVec;

/// Fast pre-check: only all-hiragana runs longer than two characters are rescanned.
#[inline]
pub fn needs_split(token: &str) -> bool {
    token.chars().nth(2).is_some() && is_hiragana_run(token)
}

/// Split one raw run. Runs that fail [`needs_split`] come back unchanged.
pub fn split_particles<'a>(token: &'a str, trie: &ParticleTrie) -> SmallVec<[&'a str; 4]> {
    if !needs_split(token) {
        return SmallVec::from_slice(&[token]);
    }

    let starts: SmallVec<[usize; 16]> = token.char_indices().map(|(i, _)| i).collect();
    let last_offset = starts.len() - 1;

    // byte ranges of the sub-tokens emitted so far
    let mut pieces: SmallVec<[(usize, usize); 4]> = SmallVec::new();
    let mut cut = 0;
    let mut j = 0;

    while j < starts.len() {
        let at = starts[j];
        let Some(particle) = trie.longest_match_at(token, at) else {
            j += 1;
            continue;
        };
        let end = at + particle.len();
        if is_deferred(particle, &token[end..], j, last_offset) {
            j += 1;
            continue;
        }

        match pieces.last_mut() {
            Some(last) if at == cut => last.1 = end,
            _ => pieces.push((cut, end)),
        }
        cut = end;
        j += particle.chars().count();
    }

    if cut < token.len() {
        pieces.push((cut, token.len()));
    }

    pieces.into_iter().map(|(s, e)| &token[s..e]).collect()
}

#[inline]
fn is_deferred(particle: &str, rest: &str, offset: usize, last_offset: usize) -> bool {
    match particle {
        "や" => offset < last_offset,
        "でも" => starts_with_negation(rest),
        _ => false,
    }
}
