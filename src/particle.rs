//! Particle trie – prefix tree of particle surface forms with a kanji wildcard edge.
//!
//! * Arena of nodes, parent owns its children through an ordered edge map
//! * `Edge::Kanji` stands for "one or more kanji-class characters" and is written `*`
//!   in pattern source
//! * Built once, read-only afterwards; `&ParticleTrie` is freely shared across threads
//!
//! Longest-match is a single greedy walk: a literal edge always wins over the
//! wildcard, and a wildcard swallows the maximal kanji run. Shorter runs are
//! never retried.

pub mod data;

use crate::patterns::kanji_run_len;
use crate::unicode::single_char;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Pattern-source spelling of the kanji wildcard.
pub const WILDCARD: char = '*';

const ROOT: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    #[error("particle pattern is empty")]
    EmptyPattern,

    #[error("particle pattern `{0}` has adjacent wildcards and can never match")]
    AdjacentWildcards(String),
}

/// Key of a trie edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Edge {
    Char(char),
    Kanji,
}

impl Edge {
    #[inline]
    fn from_source(c: char) -> Self {
        if c == WILDCARD { Edge::Kanji } else { Edge::Char(c) }
    }

    #[inline]
    fn source_char(self) -> char {
        match self {
            Edge::Char(c) => c,
            Edge::Kanji => WILDCARD,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Char(c) => write!(f, "{c}"),
            Edge::Kanji => f.write_str("[Kanji]"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Edge that leads here; `None` only for the root.
    value: Option<Edge>,
    terminal: bool,
    children: BTreeMap<Edge, usize>,
}

impl TrieNode {
    #[inline]
    pub fn value(&self) -> Option<Edge> {
        self.value
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[derive(Debug, Clone)]
pub struct ParticleTrie {
    nodes: Vec<TrieNode>,
    patterns: usize,
}

impl Default for ParticleTrie {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ParticleTrie {
    /// An empty trie: a lone, non-terminal root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            patterns: 0,
        }
    }

    /// Trie over the built-in particle table.
    pub fn builtin() -> Self {
        let mut trie = Self::new();
        for pattern in data::builtin_patterns() {
            trie.insert_unchecked(pattern);
        }
        tracing::debug!(
            patterns = trie.len(),
            nodes = trie.node_count(),
            "built particle trie"
        );
        trie
    }

    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for pattern in patterns {
            trie.insert(pattern.as_ref())?;
        }
        Ok(trie)
    }

    /// Register one pattern. `*` in `pattern` becomes the kanji wildcard edge.
    pub fn insert(&mut self, pattern: &str) -> Result<(), TrieError> {
        validate(pattern)?;
        self.insert_unchecked(pattern);
        Ok(())
    }

    fn insert_unchecked(&mut self, pattern: &str) {
        let mut node = ROOT;
        for c in pattern.chars() {
            let edge = Edge::from_source(c);
            node = match self.child(node, edge) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode {
                        value: Some(edge),
                        ..TrieNode::default()
                    });
                    self.nodes[node].children.insert(edge, next);
                    next
                }
            };
        }
        if node != ROOT && !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.patterns += 1;
        }
    }

    #[inline(always)]
    fn child(&self, node: usize, edge: Edge) -> Option<usize> {
        self.nodes[node].children.get(&edge).copied()
    }

    /// Follow literal edges only; `*` in `s` is an ordinary character here.
    fn walk_literal(&self, s: &str) -> Option<usize> {
        s.chars()
            .try_fold(ROOT, |node, c| self.child(node, Edge::Char(c)))
    }

    /// `true` iff `s` spells a registered pattern through literal edges alone.
    pub fn is_particle(&self, s: &str) -> bool {
        self.walk_literal(s)
            .is_some_and(|node| self.nodes[node].terminal)
    }

    /// Longest particle starting at character offset `start` of `text`.
    ///
    /// Returns a slice of `text`, or `None` when no terminal node is reached or
    /// `start` lies at or past the end.
    pub fn find_longest_particle<'a>(&self, text: &'a str, start: usize) -> Option<&'a str> {
        let begin = text
            .char_indices()
            .nth(start)
            .map(|(byte, _)| byte)?;
        self.longest_match_at(text, begin)
    }

    /// Byte-offset form of [`find_longest_particle`](Self::find_longest_particle).
    /// `begin` must sit on a character boundary.
    pub(crate) fn longest_match_at<'a>(&self, text: &'a str, begin: usize) -> Option<&'a str> {
        let mut node = ROOT;
        let mut pos = begin;
        let mut longest = None;

        while let Some(c) = text[pos..].chars().next() {
            if let Some(next) = self.child(node, Edge::Char(c)) {
                node = next;
                pos += c.len_utf8();
            } else if let Some(next) = self.child(node, Edge::Kanji) {
                let run = kanji_run_len(&text[pos..]);
                if run == 0 {
                    break;
                }
                node = next;
                pos += run;
            } else {
                break;
            }

            if self.nodes[node].terminal {
                longest = Some(&text[begin..pos]);
            }
        }

        longest
    }

    /// Suffixes of every pattern that extends `prefix`, in edge order.
    ///
    /// The wildcard is rendered as `*`. `prefix` itself is not listed even if
    /// it is a pattern; an unknown prefix yields an empty list.
    pub fn continuations_from(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.walk_literal(prefix) {
            self.collect(node, &mut String::new(), &mut out);
        }
        out
    }

    /// Every registered pattern in source form.
    pub fn patterns(&self) -> Vec<String> {
        self.continuations_from("")
    }

    /// Registered patterns whose first character is `c`.
    pub fn patterns_starting_with(&self, c: char) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.child(ROOT, Edge::Char(c)) {
            self.collect(node, &mut String::from(c), &mut out);
        }
        out
    }

    fn collect(&self, node: usize, buf: &mut String, out: &mut Vec<String>) {
        if self.nodes[node].terminal && !buf.is_empty() {
            out.push(buf.clone());
        }
        for (&edge, &child) in &self.nodes[node].children {
            buf.push(edge.source_char());
            self.collect(child, buf, out);
            buf.pop();
        }
    }

    /// First characters of the registered literal patterns.
    pub fn starters(&self) -> impl Iterator<Item = char> + '_ {
        self.nodes[ROOT]
            .children
            .keys()
            .filter_map(|edge| match edge {
                Edge::Char(c) => Some(*c),
                Edge::Kanji => None,
            })
    }

    /// `true` when `token` is one of [`starters`](Self::starters).
    #[inline]
    pub fn is_starter(&self, token: &str) -> bool {
        single_char(token).is_some_and(|c| self.child(ROOT, Edge::Char(c)).is_some())
    }

    /// Number of distinct registered patterns.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns == 0
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn root(&self) -> &TrieNode {
        &self.nodes[ROOT]
    }

    fn fmt_children(&self, f: &mut fmt::Formatter<'_>, node: usize, indent: &str) -> fmt::Result {
        let children = &self.nodes[node].children;
        let last = children.len().saturating_sub(1);
        for (i, &child) in children.values().enumerate() {
            let child_node = &self.nodes[child];
            let (marker, extension) = if i == last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            if let Some(edge) = child_node.value {
                let mark = if child_node.terminal { " ✓" } else { "" };
                writeln!(f, "{indent}{marker}{edge}{mark}")?;
            }
            self.fmt_children(f, child, &format!("{indent}{extension}"))?;
        }
        Ok(())
    }
}

impl fmt::Display for ParticleTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_children(f, ROOT, "")
    }
}

fn validate(pattern: &str) -> Result<(), TrieError> {
    if pattern.is_empty() {
        return Err(TrieError::EmptyPattern);
    }
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == WILDCARD && chars.peek() == Some(&WILDCARD) {
            return Err(TrieError::AdjacentWildcards(pattern.to_owned()));
        }
    }
    Ok(())
}
