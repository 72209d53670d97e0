// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Contact records, their validation, the indexed store and its persistence.

mod book;
mod indexed_store;
mod record;
mod repository;
mod validation;

pub use book::ContactBook;
pub use indexed_store::{IndexedStore, StoreResult};
pub use record::{Record, RecordUpdate};
pub use repository::{JsonFileRepository, PersistenceResult, RecordRepository};
pub use validation::{FieldValidator, PatternValidator};

#[cfg(test)]
pub(crate) use repository::MockRecordRepository;
