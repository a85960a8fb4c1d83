use thiserror::Error;

use crate::{
    html::{HtmlOptions, wrap_tokens},
    particle::{ParticleTrie, TrieError},
    stage::{classify, combine, split_particles},
};

#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("particle error: {0}")]
    Trie(#[from] TrieError),
}

/// The segmentation engine. Owns one immutable particle trie; every call
/// borrows it, so a single `Segmenter` can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    trie: ParticleTrie,
}

impl Segmenter {
    pub fn new(trie: ParticleTrie) -> Self {
        Self { trie }
    }

    pub fn builder() -> SegmenterBuilder {
        SegmenterBuilder::default()
    }

    #[inline]
    pub fn trie(&self) -> &ParticleTrie {
        &self.trie
    }

    /// Split `text` into word-like tokens.
    ///
    /// The tokens are slices of `text` and concatenate back to it exactly.
    /// Empty input yields a single empty token.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        if text.is_empty() {
            return vec![""];
        }

        let raw = classify(text);
        let refined: Vec<&str> = raw
            .iter()
            .flat_map(|&run| split_particles(run, &self.trie))
            .collect();
        let tokens = combine(text, &refined, &self.trie);

        tracing::trace!(
            raw = raw.len(),
            refined = refined.len(),
            tokens = tokens.len(),
            "tokenized"
        );
        tokens
    }

    /// Tokenize and wrap every token in an inline-block `<span>`.
    pub fn to_html(&self, text: &str, opts: &HtmlOptions) -> String {
        wrap_tokens(&self.tokenize(text), opts)
    }
}

pub struct SegmenterBuilder {
    builtin: bool,
    particles: Vec<String>,
}

impl Default for SegmenterBuilder {
    fn default() -> Self {
        Self {
            builtin: true,
            particles: Default::default(),
        }
    }
}

impl SegmenterBuilder {
    /// Register one extra particle pattern (`*` = kanji wildcard).
    pub fn particle(mut self, pattern: impl Into<String>) -> Self {
        self.particles.push(pattern.into());
        self
    }

    pub fn particles<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.particles.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Start from an empty trie instead of the built-in table.
    pub fn without_builtin_particles(mut self) -> Self {
        self.builtin = false;
        self
    }

    pub fn build(self) -> Result<Segmenter, SegmentError> {
        let mut trie = if self.builtin {
            ParticleTrie::builtin()
        } else {
            ParticleTrie::new()
        };
        for pattern in &self.particles {
            trie.insert(pattern)?;
        }
        tracing::debug!(
            builtin = self.builtin,
            extra = self.particles.len(),
            patterns = trie.len(),
            "built segmenter"
        );
        Ok(Segmenter::new(trie))
    }
}
