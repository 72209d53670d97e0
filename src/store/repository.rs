// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Snapshot persistence for the record list.

use std::fs;
use std::path::{Path, PathBuf};

use super::record::Record;
use crate::config::StorageConfig;
use crate::error::persistence::PersistenceError;

/// Result type for persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Source and sink for the ordered record list.
#[cfg_attr(test, mockall::automock)]
pub trait RecordRepository {
    /// Loads the saved records in their saved order.
    fn load(&self) -> PersistenceResult<Vec<Record>>;

    /// Replaces the saved records with `records`.
    fn save(&self, records: &[Record]) -> PersistenceResult<()>;

    /// Moves an unreadable snapshot out of the way so a later save cannot
    /// overwrite it. Returns where it went.
    fn set_aside(&self) -> PersistenceResult<PathBuf>;
}

/// Repository keeping the records as a JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileRepository {
    /// Creates a repository backed by the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Creates a repository from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.path).with_pretty(config.pretty)
    }

    /// Sets whether the snapshot is pretty-printed.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl RecordRepository for JsonFileRepository {
    fn load(&self) -> PersistenceResult<Vec<Record>> {
        if !self.path.exists() {
            return Err(PersistenceError::NotFound(self.path.clone()));
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let rows: Vec<serde_json::Value> =
            serde_json::from_str(&contents).map_err(|source| PersistenceError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        // Rows are decoded one by one so a bad row costs only itself
        let mut records = Vec::with_capacity(rows.len());
        for (row, value) in rows.into_iter().enumerate() {
            match serde_json::from_value::<Record>(value) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(path = ?self.path, row, error = %e, "Skipping undecodable row")
                }
            }
        }
        Ok(records)
    }

    fn save(&self, records: &[Record]) -> PersistenceResult<()> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(records)
        } else {
            serde_json::to_string(records)
        }
        .map_err(PersistenceError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        // Write beside the target and rename so a crash never leaves half a file
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, encoded).map_err(|e| self.io_error(e))?;
        fs::rename(&staging, &self.path).map_err(|e| self.io_error(e))?;

        tracing::debug!(path = ?self.path, count = records.len(), "Snapshot saved");
        Ok(())
    }

    fn set_aside(&self) -> PersistenceResult<PathBuf> {
        let target = self.path.with_extension("json.corrupt");
        fs::rename(&self.path, &target).map_err(|e| self.io_error(e))?;
        tracing::warn!(from = ?self.path, to = ?target, "Unreadable snapshot set aside");
        Ok(target)
    }
}
