// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the indexed contact store.
//! Runs the reference scenarios through the public API only.

use contact_index_lib::error::StoreError;
use contact_index_lib::store::{
    ContactBook, IndexedStore, JsonFileRepository, PatternValidator, Record, RecordUpdate,
};

fn with_alice() -> IndexedStore {
    let mut store = IndexedStore::new();
    store
        .add_record("Alice Smith", "alice@gmail.com", "1234567890")
        .unwrap();
    store
}

fn with_alice_and_bob() -> IndexedStore {
    let mut store = with_alice();
    store
        .add_record("Bob Alison", "bob@gmail.com", "2223334444")
        .unwrap();
    store
}

fn names(records: &[Record]) -> Vec<&str> {
    records.iter().map(|record| record.name.as_str()).collect()
}

#[test]
fn test_scenario_single_record_lookup() {
    let store = with_alice();

    let hits = store.search_substring("smith");
    assert_eq!(hits, vec![Record::new("Alice Smith", "alice@gmail.com", "1234567890")]);
    assert!(store.search_substring("bob").is_empty());
}

#[test]
fn test_scenario_shared_substring_sorted_by_name() {
    let store = with_alice_and_bob();

    assert_eq!(
        names(&store.search_substring("ali")),
        vec!["Alice Smith", "Bob Alison"]
    );
}

#[test]
fn test_scenario_key_collision_on_update() {
    let mut store = with_alice_and_bob();

    let err = store
        .update_record("1234567890", RecordUpdate::new().with_phone("2223334444"))
        .unwrap_err();

    assert_eq!(err, StoreError::DuplicateKey("2223334444".to_string()));
    let hits = store.search_substring("alice");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].phone, "1234567890");
    assert!(store.index().contains("alice", "1234567890"));
    assert!(!store.index().contains("alice", "2223334444"));
}

#[test]
fn test_scenario_delete() {
    let mut store = with_alice_and_bob();

    store.delete_record("1234567890").unwrap();

    assert!(store.search_substring("smith").is_empty());
    assert_eq!(names(&store.search_substring("ali")), vec!["Bob Alison"]);
}

#[test]
fn test_update_email_only_moves_email_matches() {
    let mut store = with_alice_and_bob();

    store
        .update_record("2223334444", RecordUpdate::new().with_email("b.alison@work.org"))
        .unwrap();

    assert!(store.search_substring("bob@").is_empty());
    assert_eq!(names(&store.search_substring("work")), vec!["Bob Alison"]);
    // Name matches are unaffected by the rebuild
    assert_eq!(names(&store.search_substring("bob")), vec!["Bob Alison"]);
}

#[test]
fn test_unicode_names_are_case_folded() {
    let mut store = IndexedStore::new();
    store
        .add_record("Émile Zoë", "emile@mail.fr", "3334445555")
        .unwrap();

    assert_eq!(store.search_substring("ÉMILE").len(), 1);
    assert_eq!(store.search_substring("zoë").len(), 1);
    assert!(store.search_substring("zoe").is_empty());
}

#[test]
fn test_book_persists_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");

    {
        let mut book = ContactBook::open(JsonFileRepository::new(&path), PatternValidator::default());
        book.add("Alice Smith", "alice@gmail.com", "1234567890").unwrap();
        book.add("Bob Alison", "bob@gmail.com", "2223334444").unwrap();
        book.delete("1234567890").unwrap();
    }

    let book = ContactBook::open(JsonFileRepository::new(&path), PatternValidator::default());
    assert_eq!(names(&book.search("ali")), vec!["Bob Alison"]);
    assert!(book.get("1234567890").is_none());
}
