// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Record store with a synchronized suffix index.
//!
//! The store owns the ordered record list and the [`SuffixTrie`] that indexes
//! it. Every mutation validates first, then changes the record list, then
//! brings the trie in line, so callers only ever observe states where a
//! substring search over the trie agrees with a scan over the records.

use tracing::{debug, info, warn};

use super::record::{Record, RecordUpdate};
use super::validation::{FieldValidator, PatternValidator};
use crate::data_structures::suffix_trie::SuffixTrie;
use crate::error::store::{Field, StoreError};

/// Result type for record store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Ordered record list kept in step with a suffix trie over names and emails.
#[derive(Debug)]
pub struct IndexedStore<V = PatternValidator> {
    /// Records in insertion order
    records: Vec<Record>,

    /// Suffix index over lower-cased names and emails, keyed by phone
    index: SuffixTrie,

    /// Field predicates checked before every mutation
    validator: V,
}

impl IndexedStore<PatternValidator> {
    /// Creates an empty store with the default validation rules.
    pub fn new() -> Self {
        Self::with_validator(PatternValidator::default())
    }
}

impl Default for IndexedStore<PatternValidator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: FieldValidator> IndexedStore<V> {
    /// Creates an empty store using `validator`.
    pub fn with_validator(validator: V) -> Self {
        Self {
            records: Vec::new(),
            index: SuffixTrie::new(),
            validator,
        }
    }

    /// Builds a store from a loaded snapshot.
    ///
    /// Records are added in order through [`IndexedStore::add_record`]; rows
    /// that fail validation or repeat an earlier phone are skipped with a
    /// warning.
    pub fn from_records<I>(records: I, validator: V) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut store = Self::with_validator(validator);
        for record in records {
            let phone = record.phone.clone();
            if let Err(e) = store.add_record(record.name, record.email, record.phone) {
                warn!(phone = %phone, error = %e, "Skipping snapshot record");
            }
        }
        info!(count = store.len(), "Record store loaded");
        store
    }

    /// Adds a record and indexes every suffix of its name and email.
    ///
    /// # Returns
    ///
    /// * `Ok(&Record)` - the stored record
    /// * `Err(StoreError::InvalidFormat)` - if a field fails validation
    /// * `Err(StoreError::DuplicateKey)` - if the phone is already in use
    pub fn add_record<N, E, P>(&mut self, name: N, email: E, phone: P) -> StoreResult<&Record>
    where
        N: Into<String>,
        E: Into<String>,
        P: Into<String>,
    {
        let record = Record::new(name, email, phone);
        self.check_name(&record.name)?;
        self.check_email(&record.email)?;
        self.check_phone(&record.phone)?;

        if self.position(&record.phone).is_some() {
            return Err(StoreError::DuplicateKey(record.phone));
        }

        info!(phone = %record.phone, "Record added");
        self.records.push(record);
        let position = self.records.len() - 1;
        index_record(&mut self.index, &self.records[position]);

        Ok(&self.records[position])
    }

    /// Applies `update` to the record keyed by `phone`.
    ///
    /// All checks run before anything changes. On success the record's old
    /// suffixes are removed under its old phone and the new ones inserted
    /// under the possibly changed phone.
    ///
    /// # Returns
    ///
    /// * `Ok(&Record)` - the updated record
    /// * `Err(StoreError::NotFound)` - if no record uses `phone`
    /// * `Err(StoreError::InvalidFormat)` - if a replacement field fails validation
    /// * `Err(StoreError::DuplicateKey)` - if the replacement phone belongs to another record
    pub fn update_record(&mut self, phone: &str, update: RecordUpdate) -> StoreResult<&Record> {
        let position = self
            .position(phone)
            .ok_or_else(|| StoreError::NotFound(phone.to_string()))?;

        if let Some(name) = &update.name {
            self.check_name(name)?;
        }
        if let Some(email) = &update.email {
            self.check_email(email)?;
        }
        if let Some(new_phone) = &update.phone {
            self.check_phone(new_phone)?;
            if new_phone != phone && self.position(new_phone).is_some() {
                return Err(StoreError::DuplicateKey(new_phone.clone()));
            }
        }

        let previous = self.records[position].clone();
        let record = &mut self.records[position];
        if let Some(name) = update.name {
            record.name = name;
        }
        if let Some(email) = update.email {
            record.email = email;
        }
        if let Some(new_phone) = update.phone {
            record.phone = new_phone;
        }

        unindex_record(&mut self.index, &previous);
        index_record(&mut self.index, &self.records[position]);
        info!(
            phone = %previous.phone,
            new_phone = %self.records[position].phone,
            "Record updated"
        );

        Ok(&self.records[position])
    }

    /// Removes the record keyed by `phone` together with its index entries.
    ///
    /// # Returns
    ///
    /// * `Ok(Record)` - the removed record
    /// * `Err(StoreError::NotFound)` - if no record uses `phone`
    pub fn delete_record(&mut self, phone: &str) -> StoreResult<Record> {
        let position = self
            .position(phone)
            .ok_or_else(|| StoreError::NotFound(phone.to_string()))?;

        unindex_record(&mut self.index, &self.records[position]);
        let removed = self.records.remove(position);
        info!(phone = %removed.phone, "Record deleted");

        Ok(removed)
    }

    /// Finds every record whose name or email contains `query`, ignoring case.
    ///
    /// Results are ordered by case-insensitive name; records with equal names
    /// keep their insertion order. An empty query matches every record.
    ///
    /// Query and fields are folded separately with [`str::to_lowercase`], so a
    /// context-dependent fold can miss. A lone `"Σ"` folds to `"σ"` and does
    /// not match `"ΟΔΟΣ"`, whose trailing sigma folds to `"ς"`.
    pub fn search_substring(&self, query: &str) -> Vec<Record> {
        let query = query.to_lowercase();
        let keys = self.index.search(&query);
        debug!(query = %query, hits = keys.len(), "Index lookup");

        sorted_by_name(
            self.records
                .iter()
                .filter(|record| keys.contains(record.phone.as_str())),
        )
    }

    /// Every record, ordered the same way as search results.
    pub fn list_sorted(&self) -> Vec<Record> {
        sorted_by_name(self.records.iter())
    }

    /// Looks up a record by phone.
    pub fn get(&self, phone: &str) -> Option<&Record> {
        self.position(phone).map(|position| &self.records[position])
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Checks if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The suffix index backing this store.
    pub fn index(&self) -> &SuffixTrie {
        &self.index
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.records.iter().position(|record| record.phone == phone)
    }

    fn check_name(&self, name: &str) -> StoreResult<()> {
        if self.validator.is_valid_name(name) {
            Ok(())
        } else {
            Err(invalid(Field::Name, name))
        }
    }

    fn check_email(&self, email: &str) -> StoreResult<()> {
        if self.validator.is_valid_email(email) {
            Ok(())
        } else {
            Err(invalid(Field::Email, email))
        }
    }

    fn check_phone(&self, phone: &str) -> StoreResult<()> {
        if self.validator.is_valid_key(phone) {
            Ok(())
        } else {
            Err(invalid(Field::Phone, phone))
        }
    }
}

fn invalid(field: Field, value: &str) -> StoreError {
    StoreError::InvalidFormat {
        field,
        value: value.to_string(),
    }
}

/// Yields every suffix of `text`, longest first.
fn suffixes(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices().map(move |(offset, _)| &text[offset..])
}

fn index_record(index: &mut SuffixTrie, record: &Record) {
    for text in record.indexed_text() {
        for suffix in suffixes(&text) {
            index.insert(suffix, &record.phone);
        }
    }
    debug!(phone = %record.phone, nodes = index.node_count(), "Record indexed");
}

fn unindex_record(index: &mut SuffixTrie, record: &Record) {
    for text in record.indexed_text() {
        for suffix in suffixes(&text) {
            index.delete(suffix, &record.phone);
        }
    }
    debug!(phone = %record.phone, nodes = index.node_count(), "Record unindexed");
}

fn sorted_by_name<'a, I>(records: I) -> Vec<Record>
where
    I: Iterator<Item = &'a Record>,
{
    let mut keyed: Vec<(String, &Record)> = records
        .map(|record| (record.name.to_lowercase(), record))
        .collect();
    // Stable sort: equal names stay in insertion order
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, record)| record.clone()).collect()
}
