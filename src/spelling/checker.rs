//! Spell checking facade and result classification.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::{LowercaseNormalizer, Normalizer};
use crate::spelling::corrector::Corrector;
use crate::trie::trie::RadixTrie;

/// Classification of a single query word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The word is stored in the dictionary.
    Exact,
    /// Not stored, and exactly one stored word is a single edit away.
    Unique(String),
    /// Not stored, two or more stored words within a single edit,
    /// sorted by normalized form.
    Multiple(Vec<String>),
    /// Not stored and nothing within a single edit.
    Unknown,
}

/// Reduce the exact-match answer and the corrector's candidate set to a
/// single verdict.
///
/// An exact match wins outright; the candidate set is irrelevant then.
pub fn classify(exact: bool, candidates: BTreeSet<String>) -> Verdict {
    if exact {
        return Verdict::Exact;
    }
    let mut candidates: Vec<String> = candidates.into_iter().collect();
    match candidates.len() {
        0 => Verdict::Unknown,
        1 => Verdict::Unique(candidates.remove(0)),
        _ => Verdict::Multiple(candidates),
    }
}

/// Dictionary-backed spell checker.
///
/// Owns the compressed trie and the normalization collaborator applied
/// to every word passing through. The dictionary is built by repeated
/// [`insert`](SpellChecker::insert) calls; once building is done, all
/// query methods take `&self` and never mutate the tree.
pub struct SpellChecker {
    trie: RadixTrie,
    normalizer: Box<dyn Normalizer>,
}

impl SpellChecker {
    /// Create a checker with the default lowercase normalizer.
    pub fn new() -> Self {
        Self::with_normalizer(Box::new(LowercaseNormalizer::new()))
    }

    /// Create a checker with a custom normalizer.
    pub fn with_normalizer(normalizer: Box<dyn Normalizer>) -> Self {
        SpellChecker {
            trie: RadixTrie::new(),
            normalizer,
        }
    }

    /// Add a dictionary word. The word is normalized first; empty words
    /// are silently ignored.
    pub fn insert(&mut self, word: &str) {
        let normalized = self.normalizer.normalize(word);
        self.trie.insert(&normalized);
    }

    /// Whether the normalized form of `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(&self.normalizer.normalize(word))
    }

    /// All stored words within a single edit of `word`.
    pub fn corrections(&self, word: &str) -> BTreeSet<String> {
        Corrector::new(&self.trie).corrections(&self.normalizer.normalize(word))
    }

    /// Classify a query word.
    pub fn check(&self, word: &str) -> Verdict {
        let normalized = self.normalizer.normalize(word);
        let exact = self.trie.contains(&normalized);
        let candidates = if exact {
            BTreeSet::new()
        } else {
            Corrector::new(&self.trie).corrections(&normalized)
        };
        classify(exact, candidates)
    }

    /// Number of distinct stored words.
    pub fn word_count(&self) -> usize {
        self.trie.len()
    }

    /// Borrow the underlying trie.
    pub fn trie(&self) -> &RadixTrie {
        &self.trie
    }

    /// Name of the active normalizer.
    pub fn normalizer_name(&self) -> &'static str {
        self.normalizer.name()
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}
