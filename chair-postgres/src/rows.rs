//! Introspection rows and their assembly into tables.

use chair_schema::{Column, LoaderError, Table};

/// One row of the table listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub comment: Option<String>,
}

/// One row of the column listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRow {
    pub table_name: String,
    pub name: String,
    pub data_type: String,
    /// `information_schema` spelling: `"YES"` or `"NO"`
    pub is_nullable: String,
    pub position: i32,
    pub comment: Option<String>,
}

impl ColumnRow {
    fn into_column(self) -> Result<Column, LoaderError> {
        let position = u32::try_from(self.position).map_err(|_| {
            LoaderError::Malformed(format!(
                "column '{}.{}' has ordinal position {}",
                self.table_name, self.name, self.position
            ))
        })?;

        Ok(Column {
            nullable: !self.is_nullable.eq_ignore_ascii_case("NO"),
            name: self.name,
            comment: self.comment.unwrap_or_default(),
            raw_type: self.data_type,
            position,
        })
    }
}

/// Group column rows under their tables.
///
/// Tables keep the order of `tables`; each table's columns are sorted by
/// position, keeping row order on ties. Columns of tables that are not
/// listed are dropped.
pub fn assemble(
    tables: Vec<TableRow>,
    columns: Vec<ColumnRow>,
) -> Result<Vec<Table>, LoaderError> {
    let mut assembled: Vec<Table> = Vec::with_capacity(tables.len());

    for row in tables {
        if assembled.iter().any(|t| t.name == row.name) {
            return Err(LoaderError::Malformed(format!(
                "table '{}' is listed more than once",
                row.name
            )));
        }
        assembled.push(Table::new(row.name).comment(row.comment.unwrap_or_default()));
    }

    for row in columns {
        if let Some(table) = assembled.iter_mut().find(|t| t.name == row.table_name) {
            table.columns.push(row.into_column()?);
        }
    }

    for table in &mut assembled {
        table.columns.sort_by_key(|c| c.position);
    }

    Ok(assembled)
}
