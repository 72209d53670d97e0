// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Contact Index Library
//!
//! A small contact book (name, email, unique ten-digit phone) with
//! case-insensitive substring search. Every suffix of every name and email is
//! inserted into a suffix trie, so a substring query is a single prefix walk.
//!
//! # Architecture
//!
//! - [`data_structures::suffix_trie`]: arena-backed trie mapping text to phone keys
//! - [`store::IndexedStore`]: record list kept in step with the trie
//! - [`store::ContactBook`]: store plus snapshot persistence
//! - [`shell::Shell`]: interactive menu driver
//! - [`config`] and [`error`]: layered configuration and the error hierarchy

pub mod config;
pub mod data_structures;
pub mod error;
pub mod shell;
pub mod store;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the contact index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
