// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Suffix Trie Implementation
//!
//! A character-keyed prefix tree where every node carries the set of record
//! keys whose indexed text passes through it. Callers insert every suffix of a
//! field, which turns a prefix walk into a substring lookup: the key set at the
//! end of the walk for `"mit"` names every record with `"mit"` somewhere in an
//! indexed field.
//!
//! Nodes are kept in an arena (`Vec<TrieNode>`) and linked by slot index.
//! Pruned slots go onto a free list and are handed out again by later inserts,
//! so the arena does not grow across repeated delete/insert cycles.
//!
//! # Example
//!
//! ```
//! use contact_index_lib::data_structures::suffix_trie::SuffixTrie;
//!
//! let mut trie = SuffixTrie::new();
//! for (offset, _) in "smith".char_indices() {
//!     trie.insert(&"smith"[offset..], "1234567890");
//! }
//!
//! assert!(trie.search("mit").contains("1234567890"));
//! assert!(trie.search("tim").is_empty());
//! ```

mod node;


pub use node::KeySet;
use node::{NodeId, TrieNode};

/// Slot of the root node. The root is never released.
const ROOT: NodeId = 0;

/// Outcome of one level of a recursive delete.
enum Removal {
    /// The `(text, key)` pair was not present; nothing was touched.
    Absent,
    /// The key was removed; `emptied` reports whether the node is now dead.
    Removed { emptied: bool },
}

/// Suffix trie mapping indexed text to the record keys that contain it.
///
/// The trie does no case folding or validation of its own; callers normalize
/// text before handing it over.
#[derive(Debug)]
pub struct SuffixTrie {
    /// Node arena, the root lives in slot 0
    nodes: Vec<TrieNode>,

    /// Released slots available for reuse
    free: Vec<NodeId>,
}

impl SuffixTrie {
    /// Creates a new trie holding only the root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            free: Vec::new(),
        }
    }

    /// Records `key` on every node along the path for `text`.
    ///
    /// Missing nodes are created. The root and the final node both receive the
    /// key, so an empty `text` only touches the root.
    pub fn insert(&mut self, text: &str, key: &str) {
        let mut node = ROOT;
        self.attach_key(node, key);

        for c in text.chars() {
            node = match self.nodes[node].children.get(&c).copied() {
                Some(child) => child,
                None => {
                    let child = self.allocate();
                    self.nodes[node].children.insert(c, child);
                    child
                }
            };
            self.attach_key(node, key);
        }
    }

    /// Removes `key` from the path for `text`, pruning nodes left dead.
    ///
    /// Pruning happens bottom-up during the unwind: a child is detached only
    /// after its own subtree has finished. If the terminal node does not hold
    /// `key`, or the path is incomplete, the trie is left unchanged.
    ///
    /// # Returns
    ///
    /// `true` if the key was removed, `false` if the pair was not present.
    pub fn delete(&mut self, text: &str, key: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        matches!(self.delete_from(ROOT, &chars, key), Removal::Removed { .. })
    }

    fn delete_from(&mut self, node: NodeId, rest: &[char], key: &str) -> Removal {
        let Some((&c, tail)) = rest.split_first() else {
            let current = &mut self.nodes[node];
            if !current.keys.remove(key) {
                return Removal::Absent;
            }
            return Removal::Removed {
                emptied: current.is_dead(),
            };
        };

        let Some(&child) = self.nodes[node].children.get(&c) else {
            return Removal::Absent;
        };

        match self.delete_from(child, tail, key) {
            Removal::Absent => Removal::Absent,
            Removal::Removed { emptied } => {
                if emptied {
                    self.nodes[node].children.remove(&c);
                    self.release(child);
                }
                let current = &mut self.nodes[node];
                current.keys.remove(key);
                Removal::Removed {
                    emptied: current.is_dead(),
                }
            }
        }
    }

    /// Returns every key recorded at the end of the path for `prefix`.
    ///
    /// A prefix that leaves the tree yields an empty set. The empty prefix
    /// yields the root's set, which holds every indexed key.
    pub fn search(&self, prefix: &str) -> KeySet {
        self.find(prefix)
            .map(|node| self.nodes[node].keys.clone())
            .unwrap_or_default()
    }

    /// Checks whether `key` is recorded at the end of the path for `prefix`.
    pub fn contains(&self, prefix: &str, key: &str) -> bool {
        self.find(prefix)
            .is_some_and(|node| self.nodes[node].keys.contains(key))
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Checks if nothing is indexed.
    pub fn is_empty(&self) -> bool {
        self.nodes[ROOT].is_dead()
    }

    fn find(&self, prefix: &str) -> Option<NodeId> {
        prefix.chars().try_fold(ROOT, |node, c| {
            self.nodes[node].children.get(&c).copied()
        })
    }

    fn attach_key(&mut self, node: NodeId, key: &str) {
        let keys = &mut self.nodes[node].keys;
        if !keys.contains(key) {
            keys.insert(key.to_owned());
        }
    }

    fn allocate(&mut self) -> NodeId {
        match self.free.pop() {
            Some(slot) => slot,
            None => {
                self.nodes.push(TrieNode::new());
                self.nodes.len() - 1
            }
        }
    }

    /// Resets a detached slot and queues it for reuse.
    fn release(&mut self, slot: NodeId) {
        self.nodes[slot] = TrieNode::new();
        self.free.push(slot);
    }

    /// Walks the tree from the root and counts `(reachable, dead)` nodes.
    #[cfg(test)]
    pub(crate) fn audit(&self) -> (usize, usize) {
        let mut reachable = 0;
        let mut dead = 0;
        let mut stack = vec![ROOT];
        while let Some(node) = stack.pop() {
            reachable += 1;
            if node != ROOT && self.nodes[node].is_dead() {
                dead += 1;
            }
            stack.extend(self.nodes[node].children.values().copied());
        }
        (reachable, dead)
    }
}

impl Default for SuffixTrie {
    fn default() -> Self {
        Self::new()
    }
}
