// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tests for the interactive shell.

use std::io::Cursor;

use super::test_utils::TestFixture;
use crate::shell::Shell;
use crate::store::{ContactBook, JsonFileRepository};

fn run_script(book: &mut ContactBook<JsonFileRepository>, script: &str) -> String {
    let mut shell = Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    shell.run(book).unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn test_add_list_search() {
    let fixture = TestFixture::new().unwrap();
    let mut book = fixture.open_book("contacts.json");

    let output = run_script(
        &mut book,
        "1\nBob Alison\nbob@gmail.com\n2223334444\n\
         1\nAlice Smith\nalice@gmail.com\n1234567890\n\
         2\n\
         3\nALI\n\
         3\nnobody\n\
         6\n",
    );

    assert!(output.contains("Added: Bob Alison <bob@gmail.com> 2223334444"));
    assert!(output.contains("  1. Alice Smith <alice@gmail.com> 1234567890"));
    assert!(output.contains("  2. Bob Alison <bob@gmail.com> 2223334444"));
    assert!(output.contains("No matching contacts."));
    assert!(output.ends_with("Goodbye.\n"));
    assert_eq!(book.store().len(), 2);
}

#[test]
fn test_invalid_input_is_reported() {
    let fixture = TestFixture::new().unwrap();
    let mut book = fixture.open_book("contacts.json");

    let output = run_script(
        &mut book,
        "1\nAlice\nalice-at-gmail\n1234567890\n\
         1\nAlice\nalice@gmail.com\n12345\n\
         9\n\
         exit\n",
    );

    assert!(output.contains("Error: Invalid email: 'alice-at-gmail'"));
    assert!(output.contains("Error: Invalid phone: '12345'"));
    assert!(output.contains("Unknown option: 9"));
    assert!(book.store().is_empty());
}

#[test]
fn test_update_keeps_blank_fields() {
    let fixture = TestFixture::new().unwrap();
    let mut book = fixture.open_book("contacts.json");
    book.add("Alice Smith", "alice@gmail.com", "1234567890").unwrap();

    let output = run_script(&mut book, "4\n1234567890\nAlice Cooper\n\n\n6\n");

    assert!(output.contains("Current: Alice Smith <alice@gmail.com> 1234567890"));
    assert!(output.contains("Updated: Alice Cooper <alice@gmail.com> 1234567890"));
    assert!(book.search("smith").is_empty());
    assert_eq!(book.search("cooper").len(), 1);
}

#[test]
fn test_update_unknown_and_duplicate() {
    let fixture = TestFixture::new().unwrap();
    let mut book = fixture.open_book("contacts.json");
    book.add("Alice Smith", "alice@gmail.com", "1234567890").unwrap();
    book.add("Bob Alison", "bob@gmail.com", "2223334444").unwrap();

    let output = run_script(
        &mut book,
        "4\n0000000000\n\
         4\n1234567890\n\n\n2223334444\n\
         4\n1234567890\n\n\n\n\
         6\n",
    );

    assert!(output.contains("Error: No contact with phone 0000000000"));
    assert!(output.contains("Error: A contact with phone 2223334444 already exists"));
    assert!(output.contains("Nothing to change."));
    assert_eq!(book.search("alice")[0].phone, "1234567890");
}

#[test]
fn test_delete_and_eof_exit() {
    let fixture = TestFixture::new().unwrap();
    let mut book = fixture.open_book("contacts.json");
    book.add("Alice Smith", "alice@gmail.com", "1234567890").unwrap();

    // No explicit exit: end of input ends the session
    let output = run_script(&mut book, "5\n1234567890\n5\n1234567890\n2\n");

    assert!(output.contains("Deleted: Alice Smith <alice@gmail.com> 1234567890"));
    assert!(output.contains("Error: No contact with phone 1234567890"));
    assert!(output.contains("No contacts."));
    assert!(output.ends_with("Goodbye.\n"));
}
