// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for the contact index.
//!
//! Component unit tests live next to their code. This module holds the
//! cross-component suites: configuration loading, error reporting, the
//! store/index consistency properties, the persistent book and the shell.

pub mod shell_tests;
pub mod store_property_tests;
