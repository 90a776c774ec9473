//! Approximate correction over the compressed trie.
//!
//! The corrector walks the trie with a single error budget, comparing
//! whole edge labels against the query instead of one character at a
//! time. A branch is explored error-free until its label first diverges
//! from the query; at that point the budget is spent on every repair
//! hypothesis that re-aligns the remainders, and the walk continues with
//! no tolerance left. Comparing compressed labels keeps the work
//! proportional to the edges actually touched near the divergence, while
//! still covering the whole single-error space.

use std::collections::BTreeSet;

use crate::trie::node::{Node, common_prefix_len};
use crate::trie::trie::RadixTrie;

/// How a mismatched edge label can be reconciled with the query by one
/// edit. Each hypothesis is evaluated independently at the first
/// divergence; several may apply at once and every applicable branch is
/// explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repair {
    /// One query character differs from the label at the divergence.
    Substitution,
    /// The label carries one character the query is missing.
    Deletion,
    /// The query carries one character the label does not have.
    Insertion,
    /// Two adjacent query characters are swapped within the label.
    Transposition,
}

impl Repair {
    /// Query characters consumed by the repaired label.
    fn consumed(self, label_len: usize) -> usize {
        match self {
            Repair::Substitution | Repair::Transposition => label_len,
            Repair::Deletion => label_len - 1,
            Repair::Insertion => label_len + 1,
        }
    }
}

/// Read-only approximate matcher over a [`RadixTrie`].
///
/// Produces every stored word within restricted Damerau-Levenshtein
/// distance <= 1 of a query. The query itself is included when it is a
/// stored word; callers normally consult the exact matcher first and
/// never look at the candidate set in that case.
pub struct Corrector<'a> {
    trie: &'a RadixTrie,
}

impl<'a> Corrector<'a> {
    /// Create a corrector over `trie`.
    pub fn new(trie: &'a RadixTrie) -> Self {
        Corrector { trie }
    }

    /// Every stored word within a single edit of the already-normalized
    /// query, deduplicated, in case-folded lexicographic order.
    ///
    /// An empty result set is a normal outcome, not an error.
    pub fn corrections(&self, word: &str) -> BTreeSet<String> {
        let query: Vec<char> = word.chars().collect();
        let mut found = BTreeSet::new();
        let mut path = String::new();
        for child in self.trie.root().children() {
            self.walk(child, &query, 0, false, &mut path, &mut found);
        }
        found
    }

    /// Compare `node`'s whole label against the query slice at `offset`
    /// and continue the descent. `spent` is the single error budget;
    /// `path` accumulates the labels consumed so far.
    fn walk(
        &self,
        node: &Node,
        query: &[char],
        offset: usize,
        spent: bool,
        path: &mut String,
        found: &mut BTreeSet<String>,
    ) {
        let label = node.label();
        let slice = window(query, offset, label.len());

        if slice == label {
            let consumed = offset + label.len();
            // An exact-length landing always counts; one trailing query
            // character is tolerated while the budget is unspent (the
            // pending edit deletes it).
            if node.is_terminal()
                && (consumed == query.len() || (!spent && consumed + 1 == query.len()))
            {
                record(found, path, label);
            }
            descend(path, label, |path| {
                for child in node.children() {
                    self.walk(child, query, consumed, spent, path, found);
                }
            });
            return;
        }

        if spent {
            return;
        }
        self.repair(node, query, offset, path, found);
    }

    /// Spend the error budget at the first divergence between `node`'s
    /// label and the query, exploring every repair hypothesis that
    /// aligns the remainders.
    fn repair(
        &self,
        node: &Node,
        query: &[char],
        offset: usize,
        path: &mut String,
        found: &mut BTreeSet<String>,
    ) {
        let label = node.label();
        let slice = window(query, offset, label.len());
        let at = common_prefix_len(label, slice);

        let mut repairs = Vec::new();

        if tail(label, at + 1) == tail(slice, at + 1) {
            repairs.push(Repair::Substitution);
        }

        let label_tail = tail(label, at + 1);
        if label_tail == window(slice, at, label_tail.len()) {
            repairs.push(Repair::Deletion);
        }

        // The insertion hypothesis needs one query character past the
        // label window, hence the full query here.
        let label_rest = tail(label, at);
        if label_rest == window(query, offset + at + 1, label_rest.len()) {
            repairs.push(Repair::Insertion);
        }

        if query.len() > offset + at + 1
            && at + 1 == label.len()
            && query[offset + at + 1] == label[at]
        {
            // The swapped pair straddles this label's final character and
            // a child edge: re-enter the child keyed by the query
            // character at the divergence, with the pair already swapped
            // in a synthetic continuation whose first character this
            // label consumed.
            if let Some(child) = node.child(slice[at]) {
                let mut swapped = Vec::with_capacity(query.len() - offset - at);
                swapped.push(query[offset + at + 1]);
                swapped.push(slice[at]);
                swapped.extend_from_slice(&query[offset + at + 2..]);
                descend(path, label, |path| {
                    self.walk(child, &swapped, 1, true, path, found);
                });
            }
        } else if at + 1 < slice.len() && swapped_tail_matches(label, slice, at) {
            repairs.push(Repair::Transposition);
        }

        for repair in repairs {
            let consumed = offset + repair.consumed(label.len());
            if node.is_terminal() && consumed == query.len() {
                record(found, path, label);
            }
            descend(path, label, |path| {
                for child in node.children() {
                    self.walk(child, query, consumed, true, path, found);
                }
            });
        }
    }
}

/// `source[start..start + len]`, clamped to the available characters.
fn window(source: &[char], start: usize, len: usize) -> &[char] {
    let start = start.min(source.len());
    let end = (start + len).min(source.len());
    &source[start..end]
}

/// `source[start..]`, empty when `start` is out of range.
fn tail(source: &[char], start: usize) -> &[char] {
    &source[start.min(source.len())..]
}

/// True when swapping the query characters at `at` and `at + 1` makes
/// the slice equal to the label from the divergence on.
fn swapped_tail_matches(label: &[char], slice: &[char], at: usize) -> bool {
    slice.len() == label.len()
        && slice[at + 1] == label[at]
        && slice[at] == label[at + 1]
        && slice[at + 2..] == label[at + 2..]
}

/// Store `path + label` as a candidate.
fn record(found: &mut BTreeSet<String>, path: &str, label: &[char]) {
    let mut word = String::with_capacity(path.len() + label.len());
    word.push_str(path);
    word.extend(label.iter());
    found.insert(word);
}

/// Push `label` onto the accumulated path for the duration of `f`.
fn descend(path: &mut String, label: &[char], f: impl FnOnce(&mut String)) {
    let saved = path.len();
    path.extend(label.iter());
    f(path);
    path.truncate(saved);
}
