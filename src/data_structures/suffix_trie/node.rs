// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the suffix trie.
//!
//! Nodes live in the trie's arena and refer to their children by slot index,
//! so a node never owns another node directly.

use fnv::FnvBuildHasher;
use hashbrown::{HashMap, HashSet};

/// Index of a node slot inside the trie arena.
pub(crate) type NodeId = usize;

/// Set of record keys attached to a node.
pub type KeySet = HashSet<String, FnvBuildHasher>;

/// A node in the suffix trie.
///
/// Each node represents one character of an indexed path. The key set holds
/// every record key with an indexed suffix passing through this node.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Map of characters to child slots
    pub children: HashMap<char, NodeId, FnvBuildHasher>,

    /// Record keys reachable through this node
    pub keys: KeySet,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dead node carries no keys and has no children.
    pub fn is_dead(&self) -> bool {
        self.keys.is_empty() && self.children.is_empty()
    }
}
