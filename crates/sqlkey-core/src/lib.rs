//! # sqlkey-core
//!
//! Per-dialect primary key generation strategies.
//!
//! Databases disagree on how primary keys are produced. Some hand out values
//! from sequence objects queried before the insert, others fill an
//! auto-increment column during the insert. This crate answers, for a given
//! [`Dialect`], which of the two applies:
//!
//! | Dialect    | Strategy                |
//! |------------|-------------------------|
//! | H2         | [`SequenceAllocation`]  |
//! | PostgreSQL | [`SequenceAllocation`]  |
//! | MySQL      | [`AutoIncrement`]       |
//! | Oracle     | [`SequenceAllocation`]  |
//! | SQL Server | [`SequenceAllocation`]  |
//!
//! SQLite is a known dialect without a registered generator.
//!
//! ## Example
//!
//! ```rust
//! use sqlkey_core::{Dialect, KeyGenError, KeyGeneratorRegistry, KeySource};
//!
//! let registry = KeyGeneratorRegistry::new();
//!
//! let source = registry.key_source(Dialect::H2, "users").unwrap();
//! assert_eq!(
//!     source,
//!     KeySource::Sequence { dialect: Dialect::H2, sequence: "seq_users".into() }
//! );
//!
//! let err = registry.generator_for(Dialect::Sqlite).unwrap_err();
//! assert_eq!(err, KeyGenError::NoGeneratorForDialect(Dialect::Sqlite));
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod key;
pub mod registry;

pub use config::KeyGenConfig;
pub use dialect::Dialect;
pub use error::{KeyGenError, Result};
pub use key::{
    AutoIncrement, KeyGenerator, KeyGeneratorKind, KeySource, SequenceAllocation, SequenceNaming,
};
pub use registry::KeyGeneratorRegistry;
