//! Dialect to key generator registry.
//!
//! The registry is an ordinary value: build it once at startup and hand it (by
//! reference or inside an `Arc`) to whatever needs to pick a key strategy for
//! the active connection's dialect. The mapping is fixed at construction and
//! the registry exposes no way to change it, so concurrent readers need no
//! synchronization.

use std::collections::HashMap;

use tracing::debug;

use crate::config::KeyGenConfig;
use crate::dialect::Dialect;
use crate::error::{KeyGenError, Result};
use crate::key::{AutoIncrement, KeyGenerator, KeySource, SequenceAllocation, SequenceNaming};

/// Immutable mapping from [`Dialect`] to its [`KeyGenerator`].
///
/// H2, PostgreSQL, Oracle and SQL Server allocate keys from sequences; MySQL
/// uses auto-increment columns. SQLite has no registered generator.
///
/// ```rust
/// use sqlkey_core::{Dialect, KeyGeneratorKind, KeyGeneratorRegistry};
///
/// let registry = KeyGeneratorRegistry::new();
/// let generator = registry.generator_for(Dialect::MySql).unwrap();
/// assert_eq!(generator.kind(), KeyGeneratorKind::AutoIncrement);
/// assert!(!registry.has_generator_for(Dialect::Sqlite));
/// ```
#[derive(Debug, Clone)]
pub struct KeyGeneratorRegistry {
    generators: HashMap<Dialect, KeyGenerator>,
}

impl KeyGeneratorRegistry {
    /// Builds the registry with default sequence naming.
    #[must_use]
    pub fn new() -> Self {
        Self::with_naming(&SequenceNaming::default())
    }

    /// Builds the registry with sequence naming taken from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyGenError::InvalidConfig`] if `config` fails validation.
    pub fn from_config(config: &KeyGenConfig) -> Result<Self> {
        Ok(Self::with_naming(&config.sequence_naming()?))
    }

    fn with_naming(naming: &SequenceNaming) -> Self {
        let sequence = |dialect| -> KeyGenerator {
            SequenceAllocation::with_naming(dialect, naming.clone()).into()
        };

        let mut generators = HashMap::with_capacity(5);
        for (dialect, generator) in [
            (Dialect::H2, sequence(Dialect::H2)),
            (Dialect::PostgreSql, sequence(Dialect::PostgreSql)),
            (Dialect::MySql, AutoIncrement::new().into()),
            (Dialect::Oracle, sequence(Dialect::Oracle)),
            (Dialect::SqlServer, sequence(Dialect::SqlServer)),
        ] {
            debug!(%dialect, kind = generator.kind().as_str(), "registered key generator");
            generators.insert(dialect, generator);
        }

        Self { generators }
    }

    /// Returns whether a key generator is registered for `dialect`.
    #[must_use]
    pub fn has_generator_for(&self, dialect: Dialect) -> bool {
        self.generators.contains_key(&dialect)
    }

    /// Returns the key generator registered for `dialect`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyGenError::NoGeneratorForDialect`] if nothing is
    /// registered for `dialect`.
    pub fn generator_for(&self, dialect: Dialect) -> Result<&KeyGenerator> {
        self.generators.get(&dialect).ok_or_else(|| {
            debug!(%dialect, "no key generator registered");
            KeyGenError::NoGeneratorForDialect(dialect)
        })
    }

    /// Describes where the next key for `table` comes from under `dialect`.
    ///
    /// # Errors
    ///
    /// Fails like [`generator_for`](Self::generator_for) and
    /// [`KeyGenerator::key_source`].
    pub fn key_source(&self, dialect: Dialect, table: &str) -> Result<KeySource> {
        self.generator_for(dialect)?.key_source(table)
    }

    /// Returns the registered dialects in [`Dialect::ALL`] order.
    pub fn dialects(&self) -> impl Iterator<Item = Dialect> + '_ {
        Dialect::ALL
            .into_iter()
            .filter(|dialect| self.generators.contains_key(dialect))
    }

    /// Returns the number of registered dialects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Returns whether no dialect is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for KeyGeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
