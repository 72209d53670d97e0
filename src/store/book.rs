// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Persistent contact book.
//!
//! [`ContactBook`] pairs an [`IndexedStore`] with a [`RecordRepository`]. The
//! snapshot is read once at startup and written after every successful
//! mutation. Repository failures never abort the book: a failed load starts
//! an empty store, a failed save is reported and the in-memory change stands.
//!
//! An unreadable snapshot is set aside before the book starts empty. If it
//! cannot be moved, saving stays off for the session so it is never
//! overwritten.

use tracing::{info, warn};

use super::indexed_store::{IndexedStore, StoreResult};
use super::record::{Record, RecordUpdate};
use super::repository::RecordRepository;
use super::validation::{FieldValidator, PatternValidator};
use crate::error::persistence::PersistenceError;
use crate::error::{report_error, ErrorContext};

/// Record store bound to the repository that persists it.
#[derive(Debug)]
pub struct ContactBook<R, V = PatternValidator> {
    store: IndexedStore<V>,
    repository: R,
    saving_blocked: bool,
}

impl<R: RecordRepository, V: FieldValidator> ContactBook<R, V> {
    /// Opens the book, loading whatever the repository holds.
    pub fn open(repository: R, validator: V) -> Self {
        let mut saving_blocked = false;
        let records = match repository.load() {
            Ok(records) => records,
            Err(PersistenceError::NotFound(path)) => {
                info!(path = ?path, "No snapshot yet, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load snapshot, starting empty");
                if let Err(e) = repository.set_aside() {
                    report_error(
                        ErrorContext::new(e, "contact_book")
                            .with_details("unreadable snapshot left in place; saving disabled"),
                    );
                    saving_blocked = true;
                }
                Vec::new()
            }
        };

        Self {
            store: IndexedStore::from_records(records, validator),
            repository,
            saving_blocked,
        }
    }

    /// Adds a contact and saves the snapshot.
    pub fn add(&mut self, name: &str, email: &str, phone: &str) -> StoreResult<Record> {
        let record = self.store.add_record(name, email, phone)?.clone();
        self.persist();
        Ok(record)
    }

    /// Updates a contact and saves the snapshot.
    pub fn update(&mut self, phone: &str, update: RecordUpdate) -> StoreResult<Record> {
        let record = self.store.update_record(phone, update)?.clone();
        self.persist();
        Ok(record)
    }

    /// Deletes a contact and saves the snapshot.
    pub fn delete(&mut self, phone: &str) -> StoreResult<Record> {
        let record = self.store.delete_record(phone)?;
        self.persist();
        Ok(record)
    }

    /// Case-insensitive substring search over names and emails.
    pub fn search(&self, query: &str) -> Vec<Record> {
        self.store.search_substring(query)
    }

    /// Every contact, sorted by name.
    pub fn list(&self) -> Vec<Record> {
        self.store.list_sorted()
    }

    /// Looks up a contact by phone.
    pub fn get(&self, phone: &str) -> Option<&Record> {
        self.store.get(phone)
    }

    /// The underlying store.
    pub fn store(&self) -> &IndexedStore<V> {
        &self.store
    }

    fn persist(&self) {
        if self.saving_blocked {
            warn!("Saving disabled, change kept in memory only");
            return;
        }
        if let Err(e) = self.repository.save(self.store.records()) {
            report_error(
                ErrorContext::new(e, "contact_book")
                    .with_details("in-memory change kept; snapshot is stale"),
            );
        }
    }
}
