//! Validator pipeline - main validation logic.

use std::io::{self, Write};

use secrecy::SecretString;

use crate::checks::{AsciiOnly, Commonality, MaxLength, MinLength, ValidationResult, Validator};
use crate::weaklist::WeakPasswordSet;

/// An ordered sequence of validators sharing one weak-password set.
///
/// Checks run in a fixed order, cheapest first. Every check runs on every
/// password; a single pass reports all violations at once.
pub struct ValidatorPipeline {
    validators: Vec<Box<dyn Validator>>,
    weak_set: WeakPasswordSet,
}

impl ValidatorPipeline {
    /// Builds the pipeline with the fixed check order: minimum length,
    /// maximum length, character set, commonality.
    pub fn new(weak_set: WeakPasswordSet) -> Self {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(MinLength),
            Box::new(MaxLength),
            Box::new(AsciiOnly),
            Box::new(Commonality),
        ];
        Self {
            validators,
            weak_set,
        }
    }

    /// Runs every validator against the password, in pipeline order.
    ///
    /// Returns one result per validator, failed or not. Evaluation is
    /// stateless: the same password against the same set always yields
    /// identical results.
    pub fn evaluate(&self, password: &SecretString) -> Vec<ValidationResult> {
        self.validators
            .iter()
            .map(|validator| {
                let result = validator.evaluate(password, &self.weak_set);
                #[cfg(feature = "tracing")]
                tracing::debug!(validator = validator.name(), pass = result.pass);
                result
            })
            .collect()
    }

    /// Runs every validator, writing each failing diagnostic to the sink
    /// as soon as it is evaluated.
    ///
    /// Returns the number of failed checks, between 0 and the pipeline
    /// length.
    pub fn check<W: Write>(&self, password: &SecretString, sink: &mut W) -> io::Result<usize> {
        let mut failed = 0;
        for validator in &self.validators {
            let result = validator.evaluate(password, &self.weak_set);
            #[cfg(feature = "tracing")]
            tracing::debug!(validator = validator.name(), pass = result.pass);
            if !result.pass {
                writeln!(sink, "{}", result.diagnostic)?;
                failed += 1;
            }
        }
        Ok(failed)
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
