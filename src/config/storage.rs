// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Storage configuration module.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how the record snapshot is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON snapshot
    pub path: PathBuf,

    /// Whether to pretty-print the snapshot
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("contacts.json"),
            pretty: true,
        }
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "storage path must not be empty".to_string(),
            ));
        }

        if self.path.is_dir() {
            return Err(ConfigError::ValidationError(format!(
                "storage path {:?} is a directory",
                self.path
            )));
        }

        Ok(())
    }
}
