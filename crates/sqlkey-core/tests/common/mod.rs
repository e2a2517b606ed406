use sqlkey_core::{Dialect, KeyGenerator, KeyGeneratorRegistry};

pub const SUPPORTED: [Dialect; 5] = [
    Dialect::H2,
    Dialect::PostgreSql,
    Dialect::MySql,
    Dialect::Oracle,
    Dialect::SqlServer,
];

pub fn generator(registry: &KeyGeneratorRegistry, dialect: Dialect) -> &KeyGenerator {
    registry
        .generator_for(dialect)
        .unwrap_or_else(|e| panic!("Expected generator for {dialect}: {e}"))
}

pub fn sequence_dialect(registry: &KeyGeneratorRegistry, dialect: Dialect) -> Dialect {
    match generator(registry, dialect) {
        KeyGenerator::Sequence(seq) => seq.dialect(),
        other => panic!("Expected sequence generator for {dialect}, got {other:?}"),
    }
}
