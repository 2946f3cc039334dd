use chair_schema::Column;

use super::{MappingTarget, TypeMappingTable};
use crate::{Error, Result};

/// Resolves columns against a [`TypeMappingTable`].
///
/// There is no fuzzy matching and no fallback type: a column whose
/// `(raw_type, nullable)` pair is not in the table is an error.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    table: &'a TypeMappingTable,
}

impl<'a> TypeResolver<'a> {
    pub fn new(table: &'a TypeMappingTable) -> Self {
        Self { table }
    }

    /// Resolve one column of `table_name`.
    pub fn resolve(&self, table_name: &str, column: &Column) -> Result<&'a MappingTarget> {
        self.table
            .get(&column.raw_type, column.nullable)
            .ok_or_else(|| Error::UnresolvedType {
                table: table_name.to_string(),
                column: column.name.clone(),
                raw_type: column.raw_type.clone(),
                nullable: column.nullable,
            })
    }
}
