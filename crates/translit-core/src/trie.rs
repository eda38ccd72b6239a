//! Longest-prefix matching over a mapping table.
//!
//! Nodes own their children in a `HashMap` keyed by `char`. Tables hold a few
//! hundred short keys, and matching walks the input one `char` at a time, so a
//! per-node map keeps lookup simple without a separate build step into a
//! double-array.

use std::collections::HashMap;

use crate::table::MappingTable;
use crate::unicode::is_nukta;

/// Result of a longest-prefix lookup.
#[derive(Debug, PartialEq)]
pub struct PrefixMatch<'a, V> {
    pub value: &'a V,
    /// Number of characters consumed from the start of the input.
    pub len: usize,
}

struct Node<V> {
    children: HashMap<char, Node<V>>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

/// Character trie over one script's mapping table.
///
/// Built once, then only read. A node is terminal exactly when it holds a
/// value.
pub struct PrefixTrie<V> {
    root: Node<V>,
    len: usize,
}

impl<V> Default for PrefixTrie<V> {
    fn default() -> Self {
        Self {
            root: Node::new(),
            len: 0,
        }
    }
}

impl<V> PrefixTrie<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_table(table: MappingTable<V>) -> Self {
        let mut trie = Self::new();
        for (key, value) in table {
            trie.insert(&key, value);
        }
        trie
    }

    /// Insert `key`, replacing any value already stored under it.
    pub fn insert(&mut self, key: &str, value: V) {
        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
        }
        if node.value.replace(value).is_none() {
            self.len += 1;
        }
    }

    /// Exact lookup of a whole key.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        node.value.as_ref()
    }

    /// Find the longest key that is a prefix of `chars`.
    ///
    /// A leading nukta never starts a match: it belongs to the letter before
    /// it and is handled by the caller.
    pub fn match_longest(&self, chars: &[char]) -> Option<PrefixMatch<'_, V>> {
        if chars.first().copied().is_some_and(is_nukta) {
            return None;
        }

        let mut node = &self.root;
        let mut longest = None;
        for (i, c) in chars.iter().enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(value) = &node.value {
                longest = Some(PrefixMatch { value, len: i + 1 });
            }
        }
        longest
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
