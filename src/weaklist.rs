//! Weak-password set management module
//!
//! Handles loading and querying the weak-password list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeakListError {
    #[error("Weak password list not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read weak password list: {0}")]
    ReadError(#[from] std::io::Error),
}

/// An immutable set of known-weak passwords, loaded once at startup.
///
/// Membership is exact string match: entries are kept verbatim, so
/// `"Password"` and `"password"` are distinct. Duplicates in the source
/// list are harmless; blank lines are skipped.
#[derive(Debug, Default, Clone)]
pub struct WeakPasswordSet {
    entries: HashSet<String>,
}

impl WeakPasswordSet {
    /// Returns an empty set, against which every password passes the
    /// commonality check.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from an in-memory sequence of entries.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = lines
            .into_iter()
            .map(Into::into)
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }

    /// Loads the weak-password set from a newline-delimited file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, WeakListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::debug!("weak list load failed: FileNotFound {}", path.display());
            return Err(WeakListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let set = Self::from_lines(content.lines().map(str::to_owned));

        #[cfg(feature = "tracing")]
        tracing::info!("weak list loaded: {} passwords from {:?}", set.len(), path);

        Ok(set)
    }

    /// Loads the weak-password set fail-open.
    ///
    /// An absent, missing, or unreadable path degrades to an empty set
    /// after printing the startup notice on stdout; the process never
    /// aborts over a bad list. The commonality check then passes every
    /// password.
    pub fn load_or_empty(path: Option<&Path>) -> Self {
        let loaded = match path {
            Some(p) => Self::from_path(p),
            None => Err(WeakListError::FileNotFound(PathBuf::new())),
        };

        match loaded {
            Ok(set) => set,
            Err(_err) => {
                println!("no weak password list given.");
                #[cfg(feature = "tracing")]
                tracing::info!("proceeding with an empty weak password set: {}", _err);
                Self::empty()
            }
        }
    }

    /// Checks if a password is in the weak-password set (exact match).
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
