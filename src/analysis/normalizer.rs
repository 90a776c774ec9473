//! Word normalization (case folding) for dictionary and query input.
//!
//! Every word entering the core — dictionary entries and queries alike —
//! passes through a normalizer first, so the trie only ever sees one
//! canonical form. Callers keep the original spelling of a query around
//! for display.

/// A normalizer folds a word into its canonical dictionary form.
pub trait Normalizer: Send + Sync {
    /// Produce the normalized form of `word`.
    fn normalize(&self, word: &str) -> String;

    /// Get the name of this normalizer.
    fn name(&self) -> &'static str;
}

/// A normalizer that lowercases words.
///
/// Uses `char::to_lowercase`, so non-ASCII alphabets (Cyrillic, Greek,
/// accented Latin) fold correctly. Characters with multi-character
/// lowercase expansions are expanded in place.
#[derive(Clone, Debug, Default)]
pub struct LowercaseNormalizer;

impl LowercaseNormalizer {
    /// Create a new lowercase normalizer.
    pub fn new() -> Self {
        LowercaseNormalizer
    }
}

impl Normalizer for LowercaseNormalizer {
    fn normalize(&self, word: &str) -> String {
        word.chars().flat_map(char::to_lowercase).collect()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// A normalizer that leaves words untouched.
///
/// Useful for tests and for input that is already folded.
#[derive(Clone, Debug, Default)]
pub struct IdentityNormalizer;

impl IdentityNormalizer {
    /// Create a new identity normalizer.
    pub fn new() -> Self {
        IdentityNormalizer
    }
}

impl Normalizer for IdentityNormalizer {
    fn normalize(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
