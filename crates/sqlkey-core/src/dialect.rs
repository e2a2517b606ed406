//! SQL dialect identities.
//!
//! Each database product is a variant of the closed [`Dialect`] enum. Code
//! that needs per-vendor behavior matches on the variant instead of relying
//! on runtime type identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::KeyGenError;

/// A database product with its own SQL conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    /// H2 database engine.
    H2,
    /// PostgreSQL.
    PostgreSql,
    /// MySQL (and wire-compatible forks).
    MySql,
    /// Oracle Database.
    Oracle,
    /// Microsoft SQL Server.
    SqlServer,
    /// SQLite.
    Sqlite,
}

impl Dialect {
    /// Every known dialect, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::H2,
        Self::PostgreSql,
        Self::MySql,
        Self::Oracle,
        Self::SqlServer,
        Self::Sqlite,
    ];

    /// Returns the canonical lowercase name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::H2 => "h2",
            Self::PostgreSql => "postgresql",
            Self::MySql => "mysql",
            Self::Oracle => "oracle",
            Self::SqlServer => "mssql",
            Self::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = KeyGenError;

    /// Resolves a dialect by name, ignoring case. Accepts the canonical names
    /// plus a few common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h2" => Ok(Self::H2),
            "postgresql" | "postgres" | "pg" => Ok(Self::PostgreSql),
            "mysql" => Ok(Self::MySql),
            "oracle" => Ok(Self::Oracle),
            "mssql" | "sqlserver" | "sql_server" => Ok(Self::SqlServer),
            "sqlite" => Ok(Self::Sqlite),
            _ => Err(KeyGenError::UnknownDialect(s.to_string())),
        }
    }
}

impl Serialize for Dialect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Dialect {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
