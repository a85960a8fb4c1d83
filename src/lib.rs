//! Rule-based Japanese word segmentation for line breaking.
//!
//! Text is cut into script-homogeneous runs, long hiragana runs are re-split
//! after particles, and the runs are merged back into word-like tokens. The
//! tokens always concatenate to the input.
//!
//! ```
//! let tokens = wakachi::tokenize("チームから。");
//! assert_eq!(tokens, vec!["チームから。"]);
//! ```

pub mod html;
pub mod particle;
pub mod patterns;
pub mod segmenter;
pub mod stage;
pub mod unicode;

use std::sync::LazyLock;

pub use html::HtmlOptions;
pub use particle::{ParticleTrie, TrieError};
pub use segmenter::{SegmentError, Segmenter, SegmenterBuilder};

static DEFAULT_SEGMENTER: LazyLock<Segmenter> = LazyLock::new(Segmenter::default);

/// The process-wide segmenter behind the free functions below.
#[inline]
pub fn default_segmenter() -> &'static Segmenter {
    &DEFAULT_SEGMENTER
}

pub fn tokenize(text: &str) -> Vec<&str> {
    DEFAULT_SEGMENTER.tokenize(text)
}

/// Exact membership in the built-in particle table (`*` is not expanded).
pub fn is_particle(s: &str) -> bool {
    DEFAULT_SEGMENTER.trie().is_particle(s)
}

/// Longest built-in particle starting at character offset `start`.
pub fn find_longest_particle(text: &str, start: usize) -> Option<&str> {
    DEFAULT_SEGMENTER.trie().find_longest_particle(text, start)
}

pub fn continuations_from(prefix: &str) -> Vec<String> {
    DEFAULT_SEGMENTER.trie().continuations_from(prefix)
}

pub fn to_html(text: &str, opts: &HtmlOptions) -> String {
    DEFAULT_SEGMENTER.to_html(text, opts)
}
