//! Compressed trie construction and exact lookup.

use std::collections::hash_map::Entry;

use crate::trie::node::{Node, common_prefix_len};

/// A compressed (radix) trie over normalized words.
///
/// Words are inserted one at a time during the build phase; afterwards
/// the tree is read-only and both the exact matcher and the approximate
/// corrector query it without mutation, so shared references are safe to
/// hand out freely.
///
/// Insertion descends by whole edge labels. When a new word diverges in
/// the middle of an existing label, the edge is split: an intermediate
/// node takes the common prefix, the old node keeps the remainder, and
/// the new suffix (if any) becomes a sibling leaf. The tree therefore
/// stays maximally compressed: every non-root node is terminal or has at
/// least two children.
#[derive(Debug, Clone)]
pub struct RadixTrie {
    root: Node,
    words: usize,
}

impl RadixTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        RadixTrie {
            root: Node::root(),
            words: 0,
        }
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.words
    }

    /// True if no word has been stored.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Insert an already-normalized word.
    ///
    /// Empty words are a no-op. Re-inserting a stored word changes
    /// nothing: descent finds the existing terminal node and leaves the
    /// tree shape untouched.
    pub fn insert(&mut self, word: &str) {
        let chars: Vec<char> = word.chars().collect();
        if chars.is_empty() {
            return;
        }
        if Self::insert_at(&mut self.root, &chars) {
            self.words += 1;
        }
    }

    // Returns true when the word was not stored before.
    fn insert_at(node: &mut Node, word: &[char]) -> bool {
        match node.children.entry(word[0]) {
            Entry::Vacant(slot) => {
                slot.insert(Node::leaf(word.to_vec()));
                true
            }
            Entry::Occupied(slot) => {
                let child = slot.into_mut();
                let shared = common_prefix_len(&child.label, word);
                if shared == child.label.len() {
                    if shared == word.len() {
                        // Word ends exactly on this node: promote the
                        // terminal flag (idempotent on re-insertion).
                        let promoted = !child.terminal;
                        child.terminal = true;
                        promoted
                    } else {
                        Self::insert_at(child, &word[shared..])
                    }
                } else {
                    // Divergence inside the label: split the edge. The
                    // intermediate node becomes terminal only when the
                    // inserted word ends at the split point.
                    child.split_at(shared);
                    if shared == word.len() {
                        child.terminal = true;
                    } else {
                        child
                            .children
                            .insert(word[shared], Node::leaf(word[shared..].to_vec()));
                    }
                    true
                }
            }
        }
    }

    /// Exact membership test for an already-normalized word.
    ///
    /// Descends the insertion path read-only: each step requires the
    /// child's whole label to match the corresponding input slice, with
    /// no error tolerance. The empty word is never stored.
    pub fn contains(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let mut node = &self.root;
        let mut offset = 0;
        while offset < chars.len() {
            match node.children.get(&chars[offset]) {
                Some(child) if chars[offset..].starts_with(&child.label) => {
                    offset += child.label.len();
                    node = child;
                }
                _ => return false,
            }
        }
        node.terminal
    }

    /// Total number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        fn count(node: &Node) -> usize {
            1 + node.children.values().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// All stored words, in case-folded lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut found = Vec::with_capacity(self.words);
        let mut prefix = String::new();
        Self::collect_words(&self.root, &mut prefix, &mut found);
        found.sort();
        found
    }

    fn collect_words(node: &Node, prefix: &mut String, found: &mut Vec<String>) {
        let saved = prefix.len();
        prefix.extend(node.label.iter());
        if node.terminal {
            found.push(prefix.clone());
        }
        for child in node.children.values() {
            Self::collect_words(child, prefix, found);
        }
        prefix.truncate(saved);
    }

    /// Borrow the root node.
    pub(crate) fn root(&self) -> &Node {
        &self.root
    }
}

impl Default for RadixTrie {
    fn default() -> Self {
        Self::new()
    }
}
