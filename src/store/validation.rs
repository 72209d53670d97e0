// Copyright (c) 2025 Contact Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Field validation for contact records.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::validation::{
    ValidationConfig, DEFAULT_EMAIL_PATTERN, DEFAULT_KEY_PATTERN, DEFAULT_MAX_FIELD_CHARS,
};
use crate::config::ConfigResult;

static DEFAULT_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_KEY_PATTERN).expect("default key pattern compiles"));

static DEFAULT_EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_EMAIL_PATTERN).expect("default email pattern compiles"));

/// Predicates the store checks before any mutation.
pub trait FieldValidator {
    /// Checks a phone number.
    fn is_valid_key(&self, key: &str) -> bool;

    /// Checks an email address.
    fn is_valid_email(&self, email: &str) -> bool;

    /// Checks a display name. Blank names are rejected.
    fn is_valid_name(&self, name: &str) -> bool {
        !name.trim().is_empty()
    }
}

/// Regex-backed validator built from [`ValidationConfig`].
#[derive(Debug, Clone)]
pub struct PatternValidator {
    key: Regex,
    email: Regex,
    max_field_chars: usize,
}

impl PatternValidator {
    /// Builds a validator from configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(PatternValidator)` - the compiled validator
    /// * `Err(ConfigError)` - if a configured pattern does not compile
    pub fn from_config(config: &ValidationConfig) -> ConfigResult<Self> {
        let (key, email) = config.compile()?;
        Ok(Self {
            key,
            email,
            max_field_chars: config.max_field_chars,
        })
    }

    fn within_limit(&self, text: &str) -> bool {
        text.chars().count() <= self.max_field_chars
    }
}

impl Default for PatternValidator {
    fn default() -> Self {
        Self {
            key: DEFAULT_KEY_REGEX.clone(),
            email: DEFAULT_EMAIL_REGEX.clone(),
            max_field_chars: DEFAULT_MAX_FIELD_CHARS,
        }
    }
}

impl FieldValidator for PatternValidator {
    fn is_valid_key(&self, key: &str) -> bool {
        self.key.is_match(key)
    }

    fn is_valid_email(&self, email: &str) -> bool {
        self.within_limit(email) && self.email.is_match(email)
    }

    fn is_valid_name(&self, name: &str) -> bool {
        !name.trim().is_empty() && self.within_limit(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1234567890", true ; "ten digits")]
    #[test_case("123456789", false ; "nine digits")]
    #[test_case("12345678901", false ; "eleven digits")]
    #[test_case("12345abcde", false ; "letters")]
    #[test_case("123 456 78", false ; "spaces")]
    #[test_case("", false ; "empty")]
    fn test_key_validation(key: &str, expected: bool) {
        assert_eq!(PatternValidator::default().is_valid_key(key), expected);
    }

    #[test_case("alice@gmail.com", true ; "plain")]
    #[test_case("first.last+tag@mail.example.org", true ; "dotted and tagged")]
    #[test_case("alice@gmail", false ; "no tld")]
    #[test_case("alice.gmail.com", false ; "no at sign")]
    #[test_case("@gmail.com", false ; "no local part")]
    #[test_case("alice@@gmail.com", false ; "double at sign")]
    #[test_case("", false ; "empty")]
    fn test_email_validation(email: &str, expected: bool) {
        assert_eq!(PatternValidator::default().is_valid_email(email), expected);
    }

    #[test_case("Alice Smith", true ; "plain")]
    #[test_case("   ", false ; "blank")]
    #[test_case("", false ; "empty")]
    fn test_name_validation(name: &str, expected: bool) {
        assert_eq!(PatternValidator::default().is_valid_name(name), expected);
    }

    #[test]
    fn test_length_limit_from_config() {
        let config = ValidationConfig {
            max_field_chars: 5,
            ..ValidationConfig::default()
        };
        let validator = PatternValidator::from_config(&config).unwrap();

        assert!(validator.is_valid_name("Alice"));
        assert!(!validator.is_valid_name("Alice Smith"));
        assert!(!validator.is_valid_email("alice@gmail.com"));
    }

    #[test]
    fn test_custom_key_pattern() {
        let config = ValidationConfig {
            key_pattern: r"^\+[0-9]{11}$".to_string(),
            ..ValidationConfig::default()
        };
        let validator = PatternValidator::from_config(&config).unwrap();

        assert!(validator.is_valid_key("+15551234567"));
        assert!(!validator.is_valid_key("1234567890"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let config = ValidationConfig {
            email_pattern: "([a-z".to_string(),
            ..ValidationConfig::default()
        };
        assert!(PatternValidator::from_config(&config).is_err());
    }
}
