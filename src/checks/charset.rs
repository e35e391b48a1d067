//! Character-set check - rejects characters outside 7-bit ASCII.

use secrecy::{ExposeSecret, SecretString};

use super::{ValidationResult, Validator};
use crate::weaklist::WeakPasswordSet;

/// Checks that every character falls within the 7-bit ASCII range
/// (0x00-0x7F).
///
/// The diagnostic reports each offending character in order of
/// occurrence, or `none` when the check passed.
#[derive(Debug, Default)]
pub struct AsciiOnly;

impl Validator for AsciiOnly {
    fn name(&self) -> &'static str {
        "character-set"
    }

    fn evaluate(&self, password: &SecretString, _weak_set: &WeakPasswordSet) -> ValidationResult {
        let bad: Vec<String> = password
            .expose_secret()
            .chars()
            .filter(|c| !c.is_ascii())
            .map(String::from)
            .collect();

        let pass = bad.is_empty();
        let shown = if pass {
            "none".to_string()
        } else {
            bad.join(",")
        };
        ValidationResult::new(
            pass,
            format!("Password contains an invalid character: {shown}"),
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
    fn test_ascii_only_valid() {
        let result = AsciiOnly.evaluate(&secret("Tr0ub4dor&3"), &WeakPasswordSet::empty());
        assert!(result.pass);
    }

    #[test]
    fn test_ascii_only_reports_bad_character() {
        let result = AsciiOnly.evaluate(&secret("café1234"), &WeakPasswordSet::empty());
        assert!(!result.pass);
        assert_eq!(
            result.diagnostic,
            "Password contains an invalid character: é"
        );
    }

    #[test]
    fn test_ascii_only_reports_every_occurrence_in_order() {
        let result = AsciiOnly.evaluate(&secret("héllö wörld"), &WeakPasswordSet::empty());
        assert!(!result.pass);
        assert_eq!(
            result.diagnostic,
            "Password contains an invalid character: é,ö,ö"
        );
    }

    #[test]
    fn test_ascii_only_control_characters_allowed() {
        // 0x00-0x1F are inside the permitted range
        let result = AsciiOnly.evaluate(&secret("pass\tword"), &WeakPasswordSet::empty());
        assert!(result.pass);
    }

    #[test]
    fn test_ascii_only_empty_password() {
        let result = AsciiOnly.evaluate(&secret(""), &WeakPasswordSet::empty());
        assert!(result.pass);
    }
}
