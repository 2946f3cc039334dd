//! Table and column metadata.

use serde::{Deserialize, Serialize};

/// A table in one schema snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table name, unique within the snapshot
    pub name: String,
    /// Table comment (empty when none)
    #[serde(default)]
    pub comment: String,
    /// Columns as returned by the loader
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a table without comment or columns.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: String::new(),
            columns: Vec::new(),
        }
    }

    /// Set the table comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Add a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Columns in ascending `position` order.
    ///
    /// The sort is stable, so columns sharing a position keep loader order.
    pub fn ordered_columns(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.iter().collect();
        columns.sort_by_key(|c| c.position);
        columns
    }
}

/// A column of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Column comment (empty when none)
    #[serde(default)]
    pub comment: String,
    /// Raw type as spelled by the database (e.g. `"character varying"`)
    #[serde(rename = "type")]
    pub raw_type: String,
    /// Whether the column accepts NULL
    #[serde(default)]
    pub nullable: bool,
    /// 1-based ordinal position within the table
    pub position: u32,
}

impl Column {
    /// Create a NOT NULL column.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>, position: u32) -> Self {
        Self {
            name: name.into(),
            comment: String::new(),
            raw_type: raw_type.into(),
            nullable: false,
            position,
        }
    }

    /// Mark the column as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Set the column comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}
