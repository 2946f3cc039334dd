use chair_schema::{LoaderError, SchemaLoader, Table};
use postgres::{Client, NoTls, Row};
use tracing::debug;

use crate::{ColumnRow, TableRow, assemble};

/// User tables of the schema with their comments, by name.
const TABLES_QUERY: &str = "\
SELECT sut.relname::text AS table_name, d.description
FROM pg_stat_user_tables sut
LEFT JOIN pg_description d ON d.objoid = sut.relid AND d.objsubid = 0
WHERE sut.schemaname = $1
ORDER BY sut.relname";

/// Columns of those tables with their comments.
///
/// `information_schema` reports domain types, so everything is cast to
/// types the driver decodes directly.
const COLUMNS_QUERY: &str = "\
SELECT
    c.table_name::text AS table_name,
    c.column_name::text AS column_name,
    c.data_type::text AS data_type,
    c.is_nullable::text AS is_nullable,
    c.ordinal_position::int AS ordinal_position,
    d.description
FROM information_schema.columns c
INNER JOIN pg_stat_user_tables sut
    ON sut.relname = c.table_name AND sut.schemaname = c.table_schema
LEFT JOIN pg_description d
    ON d.objoid = sut.relid AND d.objsubid = c.ordinal_position
WHERE sut.schemaname = $1
ORDER BY c.table_name, c.ordinal_position";

/// Loads table schemas from a PostgreSQL database.
#[derive(Debug, Clone)]
pub struct PostgresLoader {
    dsn: String,
    schema: String,
}

impl PostgresLoader {
    /// Create a loader for `schema` on the database at `dsn`.
    ///
    /// `dsn` is either a URL (`postgres://user@host/db`) or a key/value
    /// string (`host=localhost user=postgres`). Nothing is opened until
    /// the schema is loaded.
    pub fn new(dsn: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            dsn: dsn.into(),
            schema: schema.into(),
        }
    }

    pub fn schema(&self) -> &str {
        &self.schema
    }

    fn connect(&self) -> Result<Client, LoaderError> {
        debug!(schema = %self.schema, "connecting to postgres");
        Client::connect(&self.dsn, NoTls).map_err(|e| LoaderError::Connect(Box::new(e)))
    }

    fn list_tables(&self, client: &mut Client) -> Result<Vec<TableRow>, LoaderError> {
        let rows = query(client, "tables", TABLES_QUERY, &self.schema)?;
        rows.iter()
            .map(|row| {
                Ok(TableRow {
                    name: get(row, "tables", "table_name")?,
                    comment: get(row, "tables", "description")?,
                })
            })
            .collect()
    }

    fn list_columns(&self, client: &mut Client) -> Result<Vec<ColumnRow>, LoaderError> {
        let rows = query(client, "columns", COLUMNS_QUERY, &self.schema)?;
        rows.iter()
            .map(|row| {
                Ok(ColumnRow {
                    table_name: get(row, "columns", "table_name")?,
                    name: get(row, "columns", "column_name")?,
                    data_type: get(row, "columns", "data_type")?,
                    is_nullable: get(row, "columns", "is_nullable")?,
                    position: get(row, "columns", "ordinal_position")?,
                    comment: get(row, "columns", "description")?,
                })
            })
            .collect()
    }
}

impl SchemaLoader for PostgresLoader {
    fn load_table_schemas(&self) -> Result<Vec<Table>, LoaderError> {
        let mut client = self.connect()?;

        let tables = self.list_tables(&mut client)?;
        let columns = self.list_columns(&mut client)?;
        debug!(
            tables = tables.len(),
            columns = columns.len(),
            "introspected schema"
        );

        assemble(tables, columns)
    }
}

fn query(
    client: &mut Client,
    what: &'static str,
    sql: &str,
    schema: &str,
) -> Result<Vec<Row>, LoaderError> {
    debug!(query = sql, schema, "executing query");
    client.query(sql, &[&schema]).map_err(|e| LoaderError::Query {
        what,
        source: Box::new(e),
    })
}

fn get<'a, T>(row: &'a Row, what: &'static str, column: &str) -> Result<T, LoaderError>
where
    T: postgres::types::FromSql<'a>,
{
    row.try_get(column).map_err(|e| LoaderError::Query {
        what,
        source: Box::new(e),
    })
}
