// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Record store error module.
//!
//! Every variant is detected before the store touches its record list or its
//! index, so an error never leaves the two out of step.

use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Record field named in validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Display name
    Name,
    /// Email address
    Email,
    /// Phone number, the record key
    Phone,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
        };
        f.write_str(name)
    }
}

/// Errors returned by record store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Another record already uses this phone number.
    #[error("A contact with phone {0} already exists")]
    DuplicateKey(String),

    /// No record uses this phone number.
    #[error("No contact with phone {0}")]
    NotFound(String),

    /// A field failed validation.
    #[error("Invalid {field}: '{value}'")]
    InvalidFormat {
        /// The rejected field
        field: Field,
        /// The rejected value
        value: String,
    },
}
