// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Field validation configuration module.
//!
//! Patterns are stored as strings so they survive a round trip through the
//! configuration file; [`ValidationConfig::compile`] turns them into regexes.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default phone pattern: exactly ten digits.
pub const DEFAULT_KEY_PATTERN: &str = r"^[0-9]{10}$";

/// Default email pattern: local part, `@`, dotted domain.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Default upper bound on indexed field length, in characters.
pub const DEFAULT_MAX_FIELD_CHARS: usize = 128;

/// Field validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Pattern a phone number must match in full
    pub key_pattern: String,

    /// Pattern an email address must match in full
    pub email_pattern: String,

    /// Longest name or email accepted, in characters
    pub max_field_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            key_pattern: DEFAULT_KEY_PATTERN.to_string(),
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            max_field_chars: DEFAULT_MAX_FIELD_CHARS,
        }
    }
}

impl ValidationConfig {
    /// Compiles the key and email patterns.
    ///
    /// # Returns
    ///
    /// * `Ok((key, email))` - the compiled patterns
    /// * `Err(ConfigError::InvalidPattern)` - if either pattern does not compile
    pub fn compile(&self) -> ConfigResult<(Regex, Regex)> {
        let key = compile_pattern("key_pattern", &self.key_pattern)?;
        let email = compile_pattern("email_pattern", &self.email_pattern)?;
        Ok((key, email))
    }
}

fn compile_pattern(key: &str, pattern: &str) -> ConfigResult<Regex> {
    Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        key: key.to_string(),
        message: e.to_string(),
    })
}

impl Validate for ValidationConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.compile()?;

        if self.max_field_chars == 0 {
            return Err(ConfigError::ValidationError(
                "max_field_chars must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
