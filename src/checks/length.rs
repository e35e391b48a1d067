//! Length checks - enforce the password length bounds.

use secrecy::{ExposeSecret, SecretString};

use super::{ValidationResult, Validator};
use crate::weaklist::WeakPasswordSet;

const MIN_LENGTH: usize = 8;
const MAX_LENGTH: usize = 64;

/// Checks that the password meets the minimum length requirement.
///
/// Length is measured in characters, not bytes.
#[derive(Debug, Default)]
pub struct MinLength;

impl Validator for MinLength {
    fn name(&self) -> &'static str {
        "min-length"
    }

    fn evaluate(&self, password: &SecretString, _weak_set: &WeakPasswordSet) -> ValidationResult {
        let pwd = password.expose_secret();
        let len = pwd.chars().count();
        ValidationResult::new(
            len >= MIN_LENGTH,
            format!("Password must be at least {MIN_LENGTH} characters. {pwd} is {len}"),
        )
    }
}

/// Checks that the password does not exceed the maximum length.
#[derive(Debug, Default)]
pub struct MaxLength;

impl Validator for MaxLength {
    fn name(&self) -> &'static str {
        "max-length"
    }

    fn evaluate(&self, password: &SecretString, _weak_set: &WeakPasswordSet) -> ValidationResult {
        let pwd = password.expose_secret();
        let len = pwd.chars().count();
        ValidationResult::new(
            len <= MAX_LENGTH,
            format!("Password must be no more than {MAX_LENGTH} characters. {pwd} is {len}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_min_length_too_short() {
        let result = MinLength.evaluate(&secret("abc"), &WeakPasswordSet::empty());
        assert!(!result.pass);
        assert_eq!(
            result.diagnostic,
            "Password must be at least 8 characters. abc is 3"
        );
    }

    #[test]
    fn test_min_length_exactly_minimum() {
        let result = MinLength.evaluate(&secret("12345678"), &WeakPasswordSet::empty());
        assert!(result.pass);
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        // 8 characters, 9 bytes
        let result = MinLength.evaluate(&secret("café1234"), &WeakPasswordSet::empty());
        assert!(result.pass);
    }

    #[test]
    fn test_max_length_at_bound() {
        let pwd = "a".repeat(64);
        let result = MaxLength.evaluate(&secret(&pwd), &WeakPasswordSet::empty());
        assert!(result.pass);
    }

    #[test]
    fn test_max_length_too_long() {
        let pwd = "a".repeat(65);
        let result = MaxLength.evaluate(&secret(&pwd), &WeakPasswordSet::empty());
        assert!(!result.pass);
        assert!(result.diagnostic.contains("is 65"));
    }
}
