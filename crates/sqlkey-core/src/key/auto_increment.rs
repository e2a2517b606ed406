//! Auto-increment key generation.

use super::KeySource;

/// Keys assigned by the database from an auto-increment column.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AutoIncrement;

impl AutoIncrement {
    /// Creates a new auto-increment generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub(super) fn key_source(self, table: &str) -> KeySource {
        KeySource::AutoIncrement {
            table: table.to_string(),
        }
    }
}
