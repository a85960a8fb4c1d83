//! stage/classify.rs – cuts raw text into homogeneous runs.
//!
//! One left-to-right scan with a single ordered alternation (see
//! `patterns::CLASSIFIER`). At each position the first alternative that matches
//! wins, and consumed text is never revisited.

use crate::patterns::CLASSIFIER;

/// Partition `text` into runs whose concatenation is `text`.
///
/// Empty input gives an empty vector; the `[""]` convention belongs to
/// [`Segmenter::tokenize`](crate::Segmenter::tokenize).
pub fn classify(text: &str) -> Vec<&str> {
    CLASSIFIER.find_iter(text).map(|m| m.as_str()).collect()
}
