//! PostgreSQL schema loader for the chair struct generator.
//!
//! [`PostgresLoader`] introspects the user tables of one schema through
//! `pg_stat_user_tables`, `pg_description` and `information_schema.columns`.
//!
//! The connection is opened per load and closed afterwards. Use the
//! `connect_timeout` DSN parameter to bound how long connecting may take.

mod loader;
mod rows;

pub use loader::PostgresLoader;
pub use rows::{ColumnRow, TableRow, assemble};
