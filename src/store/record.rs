// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Contact record type.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A single contact. The phone number is the record's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Unique phone number, the record key
    pub phone: String,
}

impl Record {
    /// Creates a record from its three fields.
    pub fn new<N, E, P>(name: N, email: E, phone: P) -> Self
    where
        N: Into<String>,
        E: Into<String>,
        P: Into<String>,
    {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// The case-folded text fields that get indexed.
    pub(crate) fn indexed_text(&self) -> [String; 2] {
        [self.name.to_lowercase(), self.email.to_lowercase()]
    }
}

impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}> {}", self.name, self.email, self.phone)
    }
}

/// Field changes for [`IndexedStore::update_record`](super::IndexedStore::update_record).
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    /// Replacement name
    pub name: Option<String>,

    /// Replacement email
    pub email: Option<String>,

    /// Replacement phone number
    pub phone: Option<String>,
}

impl RecordUpdate {
    /// Creates an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the replacement name.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement email.
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the replacement phone number.
    pub fn with_phone<S: Into<String>>(mut self, phone: S) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Checks whether the update carries no changes.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}
