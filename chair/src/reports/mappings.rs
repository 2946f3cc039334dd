//! Mappings command report data structures.

use chair_codegen::{TypeMappingTable, package_qualifier};

use super::output::{Output, Report};

/// One row of the mapping listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    pub db_type: String,
    pub nullable: bool,
    /// Go type as it appears in generated code
    pub go_type: String,
    pub package: Option<String>,
}

/// Report listing the effective mapping table.
#[derive(Debug)]
pub struct MappingsReport {
    pub rows: Vec<MappingRow>,
}

impl MappingsReport {
    /// Build the report, keeping only `db_type` entries when given.
    pub fn new(table: &TypeMappingTable, db_type: Option<&str>) -> Self {
        let rows = table
            .iter()
            .filter(|(key, _)| db_type.is_none_or(|t| key.source_type == t))
            .map(|(key, target)| MappingRow {
                db_type: key.source_type.clone(),
                nullable: key.nullable,
                go_type: chair_codegen::go::qualified_type(
                    &target.target_type,
                    target.package.as_deref().map(package_qualifier),
                ),
                package: target.package.clone(),
            })
            .collect();

        Self { rows }
    }
}

impl Report for MappingsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Mappings ({})", self.rows.len()));

        let type_width = self.rows.iter().map(|r| r.db_type.len()).max().unwrap_or(0);
        let go_width = self.rows.iter().map(|r| r.go_type.len()).max().unwrap_or(0);

        for row in &self.rows {
            let nullability = if row.nullable { "NULL" } else { "NOT NULL" };
            let mut line = format!(
                "{:<type_width$}  {:<8}  {:<go_width$}",
                row.db_type, nullability, row.go_type
            );
            if let Some(package) = &row.package {
                line.push_str(&format!("  ({})", package));
            }
            out.list_item(line.trim_end());
        }
    }
}
