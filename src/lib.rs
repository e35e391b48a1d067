//! Streaming password validation library
//!
//! This library validates passwords against a fixed pipeline of rules
//! (length bounds, ASCII character set, weak-password list membership),
//! reporting one diagnostic per failed rule.
//!
//! # Features
//!
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_check::{ValidatorPipeline, WeakPasswordSet};
//! use secrecy::SecretString;
//!
//! // Load the weak-password list once at startup (fail-open)
//! let weak_set = WeakPasswordSet::load_or_empty(None);
//! let pipeline = ValidatorPipeline::new(weak_set);
//!
//! // Validate a password; failing checks are written to the sink
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let mut stderr = std::io::stderr();
//! let failed = pipeline.check(&password, &mut stderr).expect("write failed");
//! println!("{failed} checks failed");
//! ```

// Internal modules
mod checks;
mod pipeline;
mod weaklist;

// Public API
pub use checks::{AsciiOnly, Commonality, MaxLength, MinLength, ValidationResult, Validator};
pub use pipeline::ValidatorPipeline;
pub use weaklist::{WeakListError, WeakPasswordSet};
