//! sqlkey CLI
//!
//! Command-line tool for inspecting how primary keys are generated per
//! database dialect.

use clap::{Parser, Subcommand};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use sqlkey_core::{Dialect, KeyGenConfig, KeyGeneratorRegistry, KeySource};

/// Inspect per-dialect primary key generation.
#[derive(Parser)]
#[command(name = "sqlkey")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prefix used to derive sequence names from table names.
    #[arg(long, env = "SQLKEY_SEQUENCE_PREFIX", default_value = "seq_")]
    sequence_prefix: String,

    /// Suffix used to derive sequence names from table names.
    #[arg(long, env = "SQLKEY_SEQUENCE_SUFFIX", default_value = "")]
    sequence_suffix: String,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List known dialects and their key generation strategy.
    Dialects,

    /// Show where the next key of a table comes from.
    Resolve {
        /// Dialect name (e.g. postgresql, mysql, mssql).
        #[arg(short, long, env = "SQLKEY_DIALECT")]
        dialect: Dialect,

        /// Table name.
        #[arg(short, long)]
        table: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn config(&self) -> KeyGenConfig {
        KeyGenConfig {
            sequence_prefix: self.sequence_prefix.clone(),
            sequence_suffix: self.sequence_suffix.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("{}", run(&cli)?);
    Ok(())
}

/// Executes the parsed command and returns what should be printed.
fn run(cli: &Cli) -> anyhow::Result<String> {
    let registry = KeyGeneratorRegistry::from_config(&cli.config())?;
    debug!(dialects = registry.len(), "key generator registry ready");

    match &cli.command {
        Commands::Dialects => Ok(dialect_lines(&registry).join("\n")),

        Commands::Resolve {
            dialect,
            table,
            json,
        } => {
            let source = registry.key_source(*dialect, table)?;
            if *json {
                Ok(serde_json::to_string_pretty(&source)?)
            } else {
                Ok(describe(&source))
            }
        }
    }
}

fn dialect_lines(registry: &KeyGeneratorRegistry) -> Vec<String> {
    Dialect::ALL
        .into_iter()
        .map(|dialect| {
            let strategy = registry
                .generator_for(dialect)
                .map_or("unsupported", |generator| generator.kind().as_str());
            format!("{:<12} {strategy}", dialect.name())
        })
        .collect()
}

fn describe(source: &KeySource) -> String {
    match source {
        KeySource::Sequence { dialect, sequence } => {
            format!("sequence {sequence} ({dialect}), key known before insert")
        }
        KeySource::AutoIncrement { table } => {
            format!("auto-increment column of {table}, key known after insert")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlkey_core::KeyGenError;

    #[test]
    fn test_parse_resolve() {
        let cli = Cli::try_parse_from([
            "sqlkey", "resolve", "--dialect", "postgres", "--table", "users",
        ])
        .unwrap();
        match cli.command {
            Commands::Resolve {
                dialect,
                table,
                json,
            } => {
                assert_eq!(dialect, Dialect::PostgreSql);
                assert_eq!(table, "users");
                assert!(!json);
            }
            Commands::Dialects => panic!("Expected resolve command"),
        }
    }

    #[test]
    fn test_parse_unknown_dialect_fails() {
        let result = Cli::try_parse_from([
            "sqlkey", "resolve", "--dialect", "db2", "--table", "users",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sequence_affixes_reach_config() {
        let cli = Cli::try_parse_from([
            "sqlkey",
            "--sequence-prefix",
            "",
            "--sequence-suffix",
            "_seq",
            "dialects",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.sequence_prefix, "");
        assert_eq!(config.sequence_suffix, "_seq");
    }

    #[test]
    fn test_dialect_lines() {
        let registry = KeyGeneratorRegistry::new();
        let lines = dialect_lines(&registry);
        assert_eq!(lines.len(), Dialect::ALL.len());
        assert_eq!(lines[2], "mysql        auto_increment");
        assert_eq!(lines[5], "sqlite       unsupported");
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sqlkey").chain(args.iter().copied()))
            .unwrap_or_else(|e| panic!("Failed to parse {args:?}: {e}"))
    }

    #[test]
    fn test_run_resolve_unregistered_dialect() {
        let cli = parse(&["resolve", "--dialect", "sqlite", "--table", "users"]);
        let err = run(&cli).unwrap_err();
        assert_eq!(
            err.downcast_ref::<KeyGenError>(),
            Some(&KeyGenError::NoGeneratorForDialect(Dialect::Sqlite))
        );
        assert_eq!(
            err.to_string(),
            "no key generator registered for dialect 'sqlite'"
        );
    }

    #[test]
    fn test_run_rejects_empty_affixes() {
        let cli = parse(&["--sequence-prefix", "", "dialects"]);
        let err = run(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KeyGenError>(),
            Some(KeyGenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_resolve_json() {
        let cli = parse(&[
            "resolve", "--dialect", "mysql", "--table", "users", "--json",
        ]);
        let output = run(&cli).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"strategy": "auto_increment", "table": "users"})
        );
    }

    #[test]
    fn test_run_resolve_text() {
        let cli = parse(&[
            "--sequence-prefix",
            "",
            "--sequence-suffix",
            "_seq",
            "resolve",
            "--dialect",
            "oracle",
            "--table",
            "users",
        ]);
        assert_eq!(
            run(&cli).unwrap(),
            "sequence users_seq (oracle), key known before insert"
        );
    }

    #[test]
    fn test_run_dialects() {
        let output = run(&parse(&["dialects"])).unwrap();
        assert_eq!(output.lines().count(), Dialect::ALL.len());
        assert!(output.starts_with("h2           sequence"));
    }

    #[test]
    fn test_describe() {
        let registry = KeyGeneratorRegistry::new();
        let source = registry.key_source(Dialect::H2, "orders").unwrap();
        assert_eq!(
            describe(&source),
            "sequence seq_orders (h2), key known before insert"
        );
    }
}
