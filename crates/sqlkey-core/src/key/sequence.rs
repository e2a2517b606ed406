//! Sequence-based key allocation.

use super::KeySource;
use crate::dialect::Dialect;
use crate::error::{KeyGenError, Result};

/// Derives sequence names from table names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceNaming {
    prefix: String,
    suffix: String,
}

impl SequenceNaming {
    /// Default prefix prepended to table names.
    pub const DEFAULT_PREFIX: &'static str = "seq_";

    /// Creates a naming scheme with the given prefix and suffix.
    ///
    /// # Errors
    ///
    /// Returns [`KeyGenError::InvalidConfig`] if both affixes are empty (the
    /// sequence would collide with the table name) or either contains
    /// whitespace.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Result<Self> {
        let (prefix, suffix) = (prefix.into(), suffix.into());
        if prefix.is_empty() && suffix.is_empty() {
            return Err(KeyGenError::InvalidConfig(
                "sequence_prefix and sequence_suffix cannot both be empty".into(),
            ));
        }
        for (field, value) in [("sequence_prefix", &prefix), ("sequence_suffix", &suffix)] {
            if value.chars().any(char::is_whitespace) {
                return Err(KeyGenError::InvalidConfig(format!(
                    "{field} must not contain whitespace: {value:?}"
                )));
            }
        }
        Ok(Self { prefix, suffix })
    }

    /// Returns the prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the suffix.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Returns the sequence name for `table`.
    #[must_use]
    pub fn sequence_name(&self, table: &str) -> String {
        format!("{}{table}{}", self.prefix, self.suffix)
    }
}

impl Default for SequenceNaming {
    fn default() -> Self {
        Self {
            prefix: Self::DEFAULT_PREFIX.to_string(),
            suffix: String::new(),
        }
    }
}

/// Keys allocated from a database sequence owned by a dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceAllocation {
    dialect: Dialect,
    naming: SequenceNaming,
}

impl SequenceAllocation {
    /// Creates a sequence allocator bound to `dialect` with default naming.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self::with_naming(dialect, SequenceNaming::default())
    }

    /// Creates a sequence allocator bound to `dialect`.
    #[must_use]
    pub const fn with_naming(dialect: Dialect, naming: SequenceNaming) -> Self {
        Self { dialect, naming }
    }

    /// Returns the owning dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the naming scheme.
    #[must_use]
    pub const fn naming(&self) -> &SequenceNaming {
        &self.naming
    }

    pub(super) fn key_source(&self, table: &str) -> KeySource {
        KeySource::Sequence {
            dialect: self.dialect,
            sequence: self.naming.sequence_name(table),
        }
    }
}
