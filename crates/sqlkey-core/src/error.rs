//! Error types for key generator resolution.

use thiserror::Error;

use crate::dialect::Dialect;

/// Errors that can occur while resolving key generation for a dialect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyGenError {
    /// No key generator is registered for the dialect.
    #[error("no key generator registered for dialect '{0}'")]
    NoGeneratorForDialect(Dialect),

    /// A dialect name did not match any known dialect.
    #[error("unknown dialect: {0}")]
    UnknownDialect(String),

    /// The table name cannot be used to derive a key source.
    #[error("invalid table name: {0:?}")]
    InvalidTableName(String),

    /// Key generation configuration is invalid.
    #[error("invalid key generation config: {0}")]
    InvalidConfig(String),
}

/// Result type for key generation operations.
pub type Result<T> = std::result::Result<T, KeyGenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_generator_message_names_dialect() {
        let err = KeyGenError::NoGeneratorForDialect(Dialect::Sqlite);
        assert_eq!(
            err.to_string(),
            "no key generator registered for dialect 'sqlite'"
        );
    }

    #[test]
    fn test_invalid_table_name_is_debug_quoted() {
        let err = KeyGenError::InvalidTableName("  ".into());
        assert_eq!(err.to_string(), "invalid table name: \"  \"");
    }
}
