// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Interactive menu over a [`ContactBook`].
//!
//! The shell owns no state of its own. It reads one command per line, prompts
//! for the fields that command needs and prints the outcome. Input and output
//! are generic so the same loop runs against a terminal or a script.

use std::io::{self, BufRead, Write};

use crate::store::{ContactBook, FieldValidator, Record, RecordRepository, RecordUpdate};

const MENU: &str = "\
1. Add contact
2. List contacts
3. Search contacts
4. Update contact
5. Delete contact
6. Exit";

/// Line-oriented driver for a contact book.
#[derive(Debug)]
pub struct Shell<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Shell<I, O> {
    /// Creates a shell reading from `input` and writing to `output`.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run<R, V>(&mut self, book: &mut ContactBook<R, V>) -> io::Result<()>
    where
        R: RecordRepository,
        V: FieldValidator,
    {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            match choice.to_lowercase().as_str() {
                "1" | "add" => self.add(book)?,
                "2" | "list" => {
                    let records = book.list();
                    self.print_records(&records, "No contacts.")?;
                }
                "3" | "search" => self.search(book)?,
                "4" | "update" => self.update(book)?,
                "5" | "delete" => self.delete(book)?,
                "6" | "exit" | "quit" => break,
                other => writeln!(self.output, "Unknown option: {other}")?,
            }
        }

        writeln!(self.output, "Goodbye.")?;
        Ok(())
    }

    /// Prints `label`, then reads one trimmed line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Shell::prompt`] but maps blank input to `None`.
    fn prompt_optional(&mut self, label: &str) -> io::Result<Option<String>> {
        Ok(self.prompt(label)?.filter(|value| !value.is_empty()))
    }

    fn add<R, V>(&mut self, book: &mut ContactBook<R, V>) -> io::Result<()>
    where
        R: RecordRepository,
        V: FieldValidator,
    {
        let (Some(name), Some(email), Some(phone)) = (
            self.prompt("Name: ")?,
            self.prompt("Email: ")?,
            self.prompt("Phone (10 digits): ")?,
        ) else {
            return Ok(());
        };

        match book.add(&name, &email, &phone) {
            Ok(record) => writeln!(self.output, "Added: {record}"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn search<R, V>(&mut self, book: &ContactBook<R, V>) -> io::Result<()>
    where
        R: RecordRepository,
        V: FieldValidator,
    {
        let Some(query) = self.prompt("Search for: ")? else {
            return Ok(());
        };
        let records = book.search(&query);
        self.print_records(&records, "No matching contacts.")
    }

    fn update<R, V>(&mut self, book: &mut ContactBook<R, V>) -> io::Result<()>
    where
        R: RecordRepository,
        V: FieldValidator,
    {
        let Some(phone) = self.prompt("Phone of the contact to update: ")? else {
            return Ok(());
        };
        match book.get(&phone) {
            Some(current) => writeln!(self.output, "Current: {current}")?,
            None => return writeln!(self.output, "Error: No contact with phone {phone}"),
        }

        let mut update = RecordUpdate::new();
        update.name = self.prompt_optional("New name (blank to keep): ")?;
        update.email = self.prompt_optional("New email (blank to keep): ")?;
        update.phone = self.prompt_optional("New phone (blank to keep): ")?;

        if update.is_empty() {
            return writeln!(self.output, "Nothing to change.");
        }

        match book.update(&phone, update) {
            Ok(record) => writeln!(self.output, "Updated: {record}"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn delete<R, V>(&mut self, book: &mut ContactBook<R, V>) -> io::Result<()>
    where
        R: RecordRepository,
        V: FieldValidator,
    {
        let Some(phone) = self.prompt("Phone of the contact to delete: ")? else {
            return Ok(());
        };
        match book.delete(&phone) {
            Ok(record) => writeln!(self.output, "Deleted: {record}"),
            Err(e) => writeln!(self.output, "Error: {e}"),
        }
    }

    fn print_records(&mut self, records: &[Record], empty: &str) -> io::Result<()> {
        if records.is_empty() {
            return writeln!(self.output, "{empty}");
        }
        for (position, record) in records.iter().enumerate() {
            writeln!(self.output, "{:>3}. {record}", position + 1)?;
        }
        Ok(())
    }

    /// Consumes the shell and returns its output sink.
    pub fn into_output(self) -> O {
        self.output
    }
}
