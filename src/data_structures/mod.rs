// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for the contact index.

pub mod suffix_trie;

pub use suffix_trie::{KeySet, SuffixTrie};
