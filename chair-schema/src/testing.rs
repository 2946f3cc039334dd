//! Test utilities for schema consumers.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::cell::Cell;

use crate::{Column, LoaderError, SchemaLoader, Table};

/// In-memory loader returning canned tables or a canned failure.
#[derive(Debug, Default)]
pub struct FixtureLoader {
    tables: Vec<Table>,
    error: Option<String>,
    calls: Cell<usize>,
}

impl FixtureLoader {
    /// Create a loader returning the given tables.
    pub fn new(tables: Vec<Table>) -> Self {
        Self {
            tables,
            error: None,
            calls: Cell::new(0),
        }
    }

    /// Create a loader that fails with a connection error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            tables: Vec::new(),
            error: Some(message.into()),
            calls: Cell::new(0),
        }
    }

    /// Number of times the snapshot was requested.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl SchemaLoader for FixtureLoader {
    fn load_table_schemas(&self) -> Result<Vec<Table>, LoaderError> {
        self.calls.set(self.calls.get() + 1);
        match &self.error {
            Some(message) => Err(LoaderError::Connect(message.clone().into())),
            None => Ok(self.tables.clone()),
        }
    }
}

/// The `character_types` table used across generator tests.
pub fn character_types() -> Table {
    Table::new("character_types")
        .column(Column::new("id", "integer", 1))
        .column(Column::new("character_value_nullable", "character", 2).nullable())
        .column(Column::new("character_varying_value_nullable", "character varying", 3).nullable())
        .column(Column::new("text_value_nullable", "text", 4).nullable())
        .column(Column::new("character_value", "character", 5))
        .column(Column::new("character_varying_value", "character varying", 6))
        .column(Column::new("text_value", "text", 7))
}

/// One table per built-in type domain, as a PostgreSQL loader reports them.
pub fn sample_tables() -> Vec<Table> {
    vec![
        character_types(),
        Table::new("numeric_types")
            .comment("numeric types")
            .column(Column::new("id", "integer", 1))
            .column(
                Column::new("smallint_value_nullable", "smallint", 2)
                    .nullable()
                    .comment("smallint value nullable"),
            )
            .column(
                Column::new("integer_value_nullable", "integer", 3)
                    .nullable()
                    .comment("integer value nullable"),
            )
            .column(Column::new("bigint_value_nullable", "bigint", 4).nullable())
            .column(Column::new("decimal_value_nullable", "numeric", 5).nullable())
            .column(Column::new("numeric_value_nullable", "numeric", 6).nullable())
            .column(Column::new("real_value_nullable", "real", 7).nullable())
            .column(Column::new("double_precision_value_nullable", "double precision", 8).nullable())
            .column(Column::new("smallint_value", "smallint", 9))
            .column(Column::new("integer_value", "integer", 10))
            .column(Column::new("bigint_value", "bigint", 11))
            .column(Column::new("decimal_value", "numeric", 12))
            .column(Column::new("numeric_value", "numeric", 13))
            .column(Column::new("real_value", "real", 14))
            .column(Column::new("double_precision_value", "double precision", 15))
            .column(Column::new("smallserial_value", "smallint", 16))
            .column(Column::new("serial_value", "integer", 17))
            .column(Column::new("bigserial_value", "bigint", 18)),
        Table::new("datetime_types")
            .column(Column::new("id", "integer", 1))
            .column(Column::new("date_value_nullable", "date", 2).nullable())
            .column(Column::new("time_value_nullable", "time without time zone", 3).nullable())
            .column(
                Column::new("timestamp_value_nullable", "timestamp without time zone", 4)
                    .nullable(),
            )
            .column(
                Column::new("timestamptz_value_nullable", "timestamp with time zone", 5).nullable(),
            )
            .column(Column::new("date_value", "date", 6))
            .column(Column::new("time_value", "time without time zone", 7))
            .column(Column::new("timestamp_value", "timestamp without time zone", 8))
            .column(Column::new("timestamptz_value", "timestamp with time zone", 9)),
        Table::new("uuid_types")
            .column(Column::new("id", "integer", 1))
            .column(Column::new("uuid_value_nullable", "uuid", 2).nullable())
            .column(Column::new("uuid_value", "uuid", 3)),
        Table::new("money_types")
            .column(Column::new("id", "integer", 1))
            .column(Column::new("money_value_nullable", "money", 2).nullable())
            .column(Column::new("money_value", "money", 3)),
        Table::new("boolean_types")
            .column(Column::new("id", "integer", 1))
            .column(Column::new("boolean_value_nullable", "boolean", 2).nullable())
            .column(Column::new("boolean_value", "boolean", 3)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_loader_returns_tables() {
        let loader = FixtureLoader::new(sample_tables());

        let tables = loader.load_table_schemas().unwrap();

        assert_eq!(tables.len(), 6);
        assert_eq!(tables[0].name, "character_types");
        assert_eq!(loader.calls(), 1);
    }

    #[test]
    fn test_fixture_loader_failing() {
        let loader = FixtureLoader::failing("connection refused");

        let err = loader.load_table_schemas().unwrap_err();

        assert!(matches!(err, LoaderError::Connect(_)));
        assert_eq!(loader.calls(), 1);
    }
}
