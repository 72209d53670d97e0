// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Persistence error module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving the record snapshot.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// The snapshot file does not exist yet.
    #[error("Snapshot not found: {0}")]
    NotFound(PathBuf),

    /// The snapshot could not be read or written.
    #[error("Failed to access snapshot {path}: {source}")]
    Io {
        /// Path of the snapshot
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The snapshot contents are not a valid record list.
    #[error("Malformed snapshot {path}: {source}")]
    Malformed {
        /// Path of the snapshot
        path: PathBuf,
        /// Underlying decoding error
        #[source]
        source: serde_json::Error,
    },

    /// The record list could not be encoded.
    #[error("Failed to encode records: {0}")]
    Encode(#[source] serde_json::Error),
}
