//! Primary key generation strategies.
//!
//! A [`KeyGenerator`] describes where the next primary key of a table comes
//! from. There are exactly two strategies:
//!
//! - [`SequenceAllocation`]: the key is drawn from a database sequence before
//!   the row is inserted. The generator is bound to the dialect that owns the
//!   sequence, since sequence syntax differs per vendor.
//! - [`AutoIncrement`]: the database assigns the key from an identity column
//!   during the insert, so the value is only known afterwards.

mod auto_increment;
mod sequence;

pub use auto_increment::AutoIncrement;
pub use sequence::{SequenceAllocation, SequenceNaming};

use serde::Serialize;

use crate::dialect::Dialect;
use crate::error::{KeyGenError, Result};

/// Discriminant of a [`KeyGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyGeneratorKind {
    /// Keys allocated from a database sequence.
    Sequence,
    /// Keys assigned by an auto-increment column.
    AutoIncrement,
}

impl KeyGeneratorKind {
    /// Returns the kind as a lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::AutoIncrement => "auto_increment",
        }
    }
}

/// Where the next key value of a table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum KeySource {
    /// Query the named sequence before inserting.
    Sequence {
        /// Dialect owning the sequence.
        dialect: Dialect,
        /// Sequence name.
        sequence: String,
    },
    /// Let the database assign the key, then read it back after insert.
    AutoIncrement {
        /// Table whose identity column produces the key.
        table: String,
    },
}

/// A primary key generation strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyGenerator {
    /// Sequence-based allocation bound to a dialect.
    Sequence(SequenceAllocation),
    /// Auto-increment columns.
    AutoIncrement(AutoIncrement),
}

impl KeyGenerator {
    /// Returns the strategy kind.
    #[must_use]
    pub const fn kind(&self) -> KeyGeneratorKind {
        match self {
            Self::Sequence(_) => KeyGeneratorKind::Sequence,
            Self::AutoIncrement(_) => KeyGeneratorKind::AutoIncrement,
        }
    }

    /// Returns the dialect a sequence generator is bound to.
    ///
    /// Auto-increment generators are stateless and return `None`.
    #[must_use]
    pub const fn dialect(&self) -> Option<Dialect> {
        match self {
            Self::Sequence(seq) => Some(seq.dialect()),
            Self::AutoIncrement(_) => None,
        }
    }

    /// Returns whether the key is known before the row is inserted.
    #[must_use]
    pub const fn key_known_before_insert(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Describes where the next key for `table` comes from.
    ///
    /// # Errors
    ///
    /// Returns [`KeyGenError::InvalidTableName`] if `table` is blank or has
    /// whitespace between its first and last character.
    pub fn key_source(&self, table: &str) -> Result<KeySource> {
        let table = checked_table(table)?;
        Ok(match self {
            Self::Sequence(seq) => seq.key_source(table),
            Self::AutoIncrement(auto) => auto.key_source(table),
        })
    }
}

impl From<SequenceAllocation> for KeyGenerator {
    fn from(seq: SequenceAllocation) -> Self {
        Self::Sequence(seq)
    }
}

impl From<AutoIncrement> for KeyGenerator {
    fn from(auto: AutoIncrement) -> Self {
        Self::AutoIncrement(auto)
    }
}

fn checked_table(table: &str) -> Result<&str> {
    let trimmed = table.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
        return Err(KeyGenError::InvalidTableName(table.to_string()));
    }
    Ok(trimmed)
}
