//! The schema loader capability.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::Table;

/// Boxed error from a database driver.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Produces one schema snapshot per call.
///
/// The returned order is the order in which structs are emitted.
pub trait SchemaLoader {
    /// Load every table of the configured schema.
    fn load_table_schemas(&self) -> Result<Vec<Table>, LoaderError>;
}

impl<L: SchemaLoader + ?Sized> SchemaLoader for &L {
    fn load_table_schemas(&self) -> Result<Vec<Table>, LoaderError> {
        (**self).load_table_schemas()
    }
}

impl<L: SchemaLoader + ?Sized> SchemaLoader for Box<L> {
    fn load_table_schemas(&self) -> Result<Vec<Table>, LoaderError> {
        (**self).load_table_schemas()
    }
}

/// Schema introspection failure.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("failed to connect to the database")]
    Connect(#[source] BoxError),

    #[error("failed to query {what}")]
    Query {
        what: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("malformed schema metadata: {0}")]
    Malformed(String),

    #[error("failed to read schema snapshot '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema snapshot '{path}'")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads a schema snapshot from a JSON file.
///
/// The file holds an array of tables in the same shape [`Table`] serializes
/// to, e.g. `[{"name": "users", "columns": [{"name": "id", "type": "integer",
/// "position": 1}]}]`.
#[derive(Debug, Clone)]
pub struct JsonLoader {
    path: PathBuf,
}

impl JsonLoader {
    /// Create a loader reading the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the snapshot path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaLoader for JsonLoader {
    fn load_table_schemas(&self) -> Result<Vec<Table>, LoaderError> {
        debug!(path = %self.path.display(), "reading schema snapshot");

        let content = std::fs::read_to_string(&self.path).map_err(|source| LoaderError::Io {
            path: self.path.clone(),
            source,
        })?;
        let tables: Vec<Table> =
            serde_json::from_str(&content).map_err(|source| LoaderError::Json {
                path: self.path.clone(),
                source,
            })?;

        for (i, table) in tables.iter().enumerate() {
            if tables[..i].iter().any(|t| t.name == table.name) {
                return Err(LoaderError::Malformed(format!(
                    "table '{}' appears more than once",
                    table.name
                )));
            }
        }

        Ok(tables)
    }
}
