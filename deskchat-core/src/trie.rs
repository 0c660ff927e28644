//! Character trie over registered usernames, powering prefix autocomplete.
//!
//! The [`Trie`] stores the set of registered usernames and answers
//! prefix-match queries: [`Trie::search`] returns every stored name that
//! extends a given prefix, without ever visiting names outside that
//! prefix's subtree. The directory inserts each username exactly once at
//! registration; the trie has no delete operation because usernames live
//! for the whole process. Search and teardown both walk the node chain
//! iteratively, so a pathological username length cannot exhaust the
//! call stack.

use std::collections::HashMap;

/// One character position in some stored username.
///
/// `word_end` marks that a complete username ends here; the root node
/// represents the empty prefix.
#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    word_end: bool,
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Explicit work list again: the generated drop glue would otherwise
        // recurse one frame chain per character of the deepest username.
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Prefix index over a set of usernames.
///
/// Insertion cost is proportional to the username length; a search costs
/// the prefix length plus the size of the matching subtree.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: TrieNode::default(),
        }
    }

    /// Inserts a username, creating one node per character as needed.
    ///
    /// Safe to call repeatedly with the same word: only the end-of-word
    /// flag on the final node is set, so no duplicate entries can arise.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.word_end = true;
    }

    /// Returns `true` if `word` was inserted as a complete username.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.node_at(word).is_some_and(|node| node.word_end)
    }

    /// Returns every stored username extending `prefix`, including the
    /// prefix itself when it is a complete username.
    ///
    /// The empty prefix enumerates the whole trie. A prefix with no
    /// matching path yields an empty vector. Result order is unspecified;
    /// callers that display the list should sort it themselves.
    #[must_use]
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.node_at(prefix) else {
            return Vec::new();
        };

        // Explicit work list instead of recursion: call depth would
        // otherwise track the longest stored username.
        let mut matches = Vec::new();
        let mut pending = vec![(start, prefix.to_owned())];
        while let Some((node, word)) = pending.pop() {
            for (ch, child) in &node.children {
                let mut extended = word.clone();
                extended.push(*ch);
                pending.push((child, extended));
            }
            if node.word_end {
                matches.push(word);
            }
        }
        matches
    }

    /// Walks the trie along `prefix`, returning the node it ends at.
    fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
