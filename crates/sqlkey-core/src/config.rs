//! Key generation configuration.

use serde::Deserialize;

use crate::error::Result;
use crate::key::SequenceNaming;

/// Settings that shape how registered generators describe keys.
///
/// Configuration never changes which dialects are registered, only how
/// sequence names are derived.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyGenConfig {
    /// Prepended to the table name to form a sequence name.
    pub sequence_prefix: String,
    /// Appended to the table name to form a sequence name.
    pub sequence_suffix: String,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            sequence_prefix: SequenceNaming::DEFAULT_PREFIX.to_string(),
            sequence_suffix: String::new(),
        }
    }
}

impl KeyGenConfig {
    /// Checks that the configuration yields usable sequence names.
    ///
    /// # Errors
    ///
    /// Fails like [`SequenceNaming::new`].
    pub fn validate(&self) -> Result<()> {
        self.sequence_naming().map(|_| ())
    }

    /// Returns the sequence naming scheme described by this configuration.
    ///
    /// # Errors
    ///
    /// Fails like [`SequenceNaming::new`].
    pub fn sequence_naming(&self) -> Result<SequenceNaming> {
        SequenceNaming::new(&self.sequence_prefix, &self.sequence_suffix)
    }
}
