//! Text normalization collaborators for the spell checker.
//!
//! The trie stores words in normalized form only; normalization itself is
//! supplied from outside the core as an explicit [`Normalizer`]
//! implementation rather than ambient locale state.

pub mod normalizer;

// Re-export commonly used types
pub use normalizer::*;
