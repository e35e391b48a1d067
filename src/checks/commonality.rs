//! Commonality check - rejects passwords found in the weak-password set.

use secrecy::{ExposeSecret, SecretString};

use super::{ValidationResult, Validator};
use crate::weaklist::WeakPasswordSet;

/// Checks that the password is not in the weak-password set.
///
/// With an empty set every password passes, which is what the fail-open
/// loader degrades to.
#[derive(Debug, Default)]
pub struct Commonality;

impl Validator for Commonality {
    fn name(&self) -> &'static str {
        "commonality"
    }

    fn evaluate(&self, password: &SecretString, weak_set: &WeakPasswordSet) -> ValidationResult {
        let pwd = password.expose_secret();
        ValidationResult::new(
            !weak_set.contains(pwd),
            format!("{pwd} is too common. Try making the password more unique"),
        )
    }
}
