//! Randomized equivalence between the trie traversal and the reference
//! distance metric.
//!
//! The corrector's single-error-budget walk and a brute-force scan with
//! the restricted Damerau-Levenshtein distance must produce identical
//! candidate sets for identical inputs. Small alphabets and short words
//! maximize split density, shared prefixes and transposition collisions,
//! which is exactly where the traversal's repair hypotheses interact.

use std::collections::BTreeSet;

use orthos::prelude::*;
use orthos::spelling::levenshtein::within_one_edit;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_word(rng: &mut StdRng, alphabet: &[char], max_len: usize) -> String {
    let len = rng.random_range(1..=max_len);
    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}

fn oracle(stored: &[String], query: &str) -> BTreeSet<String> {
    stored
        .iter()
        .filter(|word| within_one_edit(query, word))
        .cloned()
        .collect()
}

fn assert_equivalence(seed: u64, alphabet: &[char], dict_size: usize, max_len: usize, queries: usize) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut trie = RadixTrie::new();
    for _ in 0..dict_size {
        trie.insert(&random_word(&mut rng, alphabet, max_len));
    }
    let stored = trie.words();
    let corrector = Corrector::new(&trie);

    for _ in 0..queries {
        let query = if rng.random_range(0..12) == 0 {
            String::new()
        } else {
            random_word(&mut rng, alphabet, max_len + 1)
        };
        let found = corrector.corrections(&query);
        let expected = oracle(&stored, &query);
        assert_eq!(
            found, expected,
            "mismatch for query {query:?} over {} stored words (seed {seed})",
            stored.len()
        );
    }
}

#[test]
fn traversal_matches_reference_distance() {
    for seed in 0..8 {
        assert_equivalence(seed, &['a', 'b', 'c'], 40, 6, 250);
    }
}

#[test]
fn traversal_matches_reference_on_dense_short_words() {
    // Two-letter alphabet, words of at most four characters: nearly
    // every pair of stored words collides somewhere in the trie.
    for seed in 0..8 {
        assert_equivalence(seed, &['a', 'b'], 25, 4, 250);
    }
}

#[test]
fn traversal_matches_reference_on_longer_words() {
    for seed in 0..4 {
        assert_equivalence(seed, &['a', 'b', 'c', 'd'], 60, 9, 150);
    }
}

#[test]
fn every_single_edit_of_a_stored_word_is_found() {
    // Exhaustive single-error neighborhood of one word: every edited
    // form must lead back to the original.
    let word = "abcab";
    let alphabet = ['a', 'b', 'c'];
    let mut trie = RadixTrie::new();
    trie.insert(word);
    let corrector = Corrector::new(&trie);

    let chars: Vec<char> = word.chars().collect();
    let mut neighbors: BTreeSet<String> = BTreeSet::new();

    // Deletions
    for i in 0..chars.len() {
        let mut edited = chars.clone();
        edited.remove(i);
        neighbors.insert(edited.into_iter().collect());
    }
    // Substitutions
    for i in 0..chars.len() {
        for c in alphabet {
            let mut edited = chars.clone();
            edited[i] = c;
            neighbors.insert(edited.into_iter().collect());
        }
    }
    // Insertions
    for i in 0..=chars.len() {
        for c in alphabet {
            let mut edited = chars.clone();
            edited.insert(i, c);
            neighbors.insert(edited.into_iter().collect());
        }
    }
    // Adjacent transpositions
    for i in 0..chars.len() - 1 {
        let mut edited = chars.clone();
        edited.swap(i, i + 1);
        neighbors.insert(edited.into_iter().collect());
    }

    for query in neighbors {
        let found = corrector.corrections(&query);
        assert!(
            found.contains(word),
            "edited form {query:?} failed to reach {word:?}"
        );
    }
}
