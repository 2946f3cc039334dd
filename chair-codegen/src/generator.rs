//! Schema snapshot to Go source.

use std::collections::HashMap;

use chair_config::Config;
use chair_core::{to_singular, to_upper_camel};
use chair_schema::Table;
use tracing::debug;

use crate::{
    Error, ImportCollector, Result, TypeResolver,
    go::{qualified_type, render_file, render_tag},
};

/// Options that shape the generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Package clause of the generated file
    pub package_name: String,
    /// Struct tag keys, in rendering order
    pub tags: Vec<String>,
}

impl GenerateOptions {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            tags: Vec::new(),
        }
    }

    /// Set the struct tag keys.
    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

impl From<&Config> for GenerateOptions {
    fn from(config: &Config) -> Self {
        Self::new(config.package_name.clone()).tags(config.tags.iter().cloned())
    }
}

/// A column resolved to a struct field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    /// Column name as reported by the loader
    pub column_name: String,
    /// Exported Go field name
    pub field_name: String,
    /// Target type from the mapping table, unqualified
    pub target_type: String,
    /// Package declaring the target type
    pub target_package: Option<String>,
    /// Type as written in the struct, e.g. `sql.NullString`
    pub go_type: String,
    /// Rendered struct tag (empty when no tag keys are configured)
    pub tag: String,
    pub comment: String,
}

/// A table resolved to a struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTable {
    pub table_name: String,
    pub struct_name: String,
    pub comment: String,
    /// Fields in column position order
    pub fields: Vec<ResolvedField>,
}

/// Output of one generation pass.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub source: String,
    pub tables: Vec<ResolvedTable>,
    pub imports: Vec<String>,
}

impl GeneratedFile {
    /// Total number of fields across all structs.
    pub fn field_count(&self) -> usize {
        self.tables.iter().map(|t| t.fields.len()).sum()
    }
}

/// Turns a schema snapshot into one Go source file.
///
/// Generation is deterministic: the same tables, mappings and options always
/// produce byte-identical output. Structs follow loader order.
#[derive(Debug, Clone)]
pub struct Generator {
    options: GenerateOptions,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Resolve and render `tables`.
    ///
    /// The first unresolved type or identifier problem aborts the pass.
    pub fn generate(
        &self,
        tables: &[Table],
        resolver: &TypeResolver<'_>,
    ) -> Result<GeneratedFile> {
        let mut imports = ImportCollector::new();
        let resolved = self.resolve(tables, resolver, &mut imports)?;
        let source = render_file(&self.options.package_name, &imports, &resolved);

        Ok(GeneratedFile {
            source,
            tables: resolved,
            imports: imports.iter().map(str::to_string).collect(),
        })
    }

    /// Resolve every table, registering the packages the fields need.
    pub fn resolve(
        &self,
        tables: &[Table],
        resolver: &TypeResolver<'_>,
        imports: &mut ImportCollector,
    ) -> Result<Vec<ResolvedTable>> {
        let mut struct_names: HashMap<String, &str> = HashMap::new();
        let mut resolved = Vec::with_capacity(tables.len());

        for table in tables {
            let struct_name = to_upper_camel(&to_singular(&table.name));
            check_identifier("struct", &struct_name, &table.name)?;
            if let Some(first) = struct_names.insert(struct_name.clone(), &table.name) {
                return Err(Error::DuplicateIdentifier {
                    kind: "struct",
                    name: struct_name,
                    first: first.to_string(),
                    second: table.name.clone(),
                });
            }

            let fields = self.resolve_fields(table, resolver, imports)?;
            debug!(table = %table.name, %struct_name, fields = fields.len(), "resolved table");

            resolved.push(ResolvedTable {
                table_name: table.name.clone(),
                struct_name,
                comment: table.comment.clone(),
                fields,
            });
        }

        Ok(resolved)
    }

    fn resolve_fields(
        &self,
        table: &Table,
        resolver: &TypeResolver<'_>,
        imports: &mut ImportCollector,
    ) -> Result<Vec<ResolvedField>> {
        let mut field_names: HashMap<String, &str> = HashMap::new();
        let mut fields = Vec::with_capacity(table.columns.len());

        for column in table.ordered_columns() {
            let field_name = to_upper_camel(&column.name);
            check_identifier("field", &field_name, &column.name)?;
            if let Some(first) = field_names.insert(field_name.clone(), &column.name) {
                return Err(Error::DuplicateIdentifier {
                    kind: "field",
                    name: field_name,
                    first: format!("{}.{}", table.name, first),
                    second: format!("{}.{}", table.name, column.name),
                });
            }

            let target = resolver.resolve(&table.name, column)?;
            let qualifier = match &target.package {
                Some(package) => Some(imports.add(package)?),
                None => None,
            };

            fields.push(ResolvedField {
                column_name: column.name.clone(),
                field_name,
                target_type: target.target_type.clone(),
                target_package: target.package.clone(),
                go_type: qualified_type(&target.target_type, qualifier.as_deref()),
                tag: render_tag(&self.options.tags, &column.name),
                comment: column.comment.clone(),
            });
        }

        Ok(fields)
    }
}

/// Exported Go identifiers must start with an (upper case) letter.
fn check_identifier(kind: &'static str, name: &str, source_name: &str) -> Result<()> {
    match name.chars().next() {
        Some(c) if c.is_alphabetic() => Ok(()),
        _ => Err(Error::InvalidIdentifier {
            kind,
            name: name.to_string(),
            source_name: source_name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use chair_core::TypeMapping;
    use chair_schema::{
        Column,
        testing::{character_types, sample_tables},
    };

    use super::*;
    use crate::TypeMappingTable;

    fn generate(tables: &[Table], options: GenerateOptions) -> Result<GeneratedFile> {
        let mappings = TypeMappingTable::builtin();
        Generator::new(options).generate(tables, &TypeResolver::new(&mappings))
    }

    #[test]
    fn test_character_types() {
        let file = generate(&[character_types()], GenerateOptions::new("model")).unwrap();

        assert_eq!(
            file.source,
            "// Code generated by chair. DO NOT EDIT.

package model

import \"database/sql\"

type CharacterType struct {
\tID                            int
\tCharacterValueNullable        sql.NullString
\tCharacterVaryingValueNullable sql.NullString
\tTextValueNullable             sql.NullString
\tCharacterValue                string
\tCharacterVaryingValue         string
\tTextValue                     string
}
"
        );
        assert_eq!(file.imports, ["database/sql"]);
        assert_eq!(file.field_count(), 7);
    }

    #[test]
    fn test_no_imports() {
        let table = Table::new("users")
            .column(Column::new("id", "integer", 1))
            .column(Column::new("name", "text", 2));

        let file = generate(&[table], GenerateOptions::new("db")).unwrap();

        assert_eq!(
            file.source,
            "// Code generated by chair. DO NOT EDIT.

package db

type User struct {
\tID   int
\tName string
}
"
        );
        assert!(file.imports.is_empty());
    }

    #[test]
    fn test_fields_follow_position() {
        let table = Table::new("users")
            .column(Column::new("email", "text", 3))
            .column(Column::new("id", "integer", 1))
            .column(Column::new("name", "text", 2));

        let file = generate(&[table], GenerateOptions::new("model")).unwrap();

        let names: Vec<&str> = file.tables[0]
            .fields
            .iter()
            .map(|f| f.field_name.as_str())
            .collect();
        assert_eq!(names, ["ID", "Name", "Email"]);
    }

    #[test]
    fn test_tables_keep_loader_order() {
        let tables = [Table::new("zebras"), Table::new("apples")];

        let file = generate(&tables, GenerateOptions::new("model")).unwrap();

        let names: Vec<&str> = file.tables.iter().map(|t| t.struct_name.as_str()).collect();
        assert_eq!(names, ["Zebra", "Apple"]);
    }

    #[test]
    fn test_comments_and_tags() {
        let table = Table::new("order_items")
            .comment("line items\nof an order")
            .column(Column::new("id", "bigint", 1).comment("surrogate key"))
            .column(Column::new("order_id", "bigint", 2))
            .column(Column::new("shipped_at", "timestamp with time zone", 3).nullable());

        let options = GenerateOptions::new("model").tags(["db", "json"]);
        let file = generate(&[table], options).unwrap();

        assert_eq!(
            file.source,
            "// Code generated by chair. DO NOT EDIT.

package model

import \"database/sql\"

// OrderItem line items of an order
type OrderItem struct {
\tID        int64        `db:\"id\" json:\"id\"` // surrogate key
\tOrderID   int64        `db:\"order_id\" json:\"order_id\"`
\tShippedAt sql.NullTime `db:\"shipped_at\" json:\"shipped_at\"`
}
"
        );
    }

    #[test]
    fn test_imports_block_sorted() {
        let table = Table::new("events")
            .column(Column::new("at", "date", 1))
            .column(Column::new("note", "text", 2).nullable());

        let file = generate(&[table], GenerateOptions::new("model")).unwrap();

        assert!(file.source.contains("import (\n\t\"database/sql\"\n\t\"time\"\n)\n"));
        assert!(file.source.contains("\tAt   time.Time\n"));
        assert_eq!(file.imports, ["database/sql", "time"]);
    }

    #[test]
    fn test_deterministic() {
        let first = generate(&sample_tables(), GenerateOptions::new("model")).unwrap();
        let second = generate(&sample_tables(), GenerateOptions::new("model")).unwrap();
        assert_eq!(first.source, second.source);
    }

    #[test]
    fn test_unresolved_type() {
        let table = Table::new("hosts")
            .column(Column::new("id", "integer", 1))
            .column(Column::new("address", "inet", 2));

        let err = generate(&[table], GenerateOptions::new("model")).unwrap_err();

        assert!(err.to_string().contains("'inet'"));
        assert!(matches!(err, Error::UnresolvedType { .. }));
    }

    #[test]
    fn test_overlay_resolves_unknown_type() {
        let table = Table::new("hosts").column(Column::new("address", "inet", 1));
        let mappings =
            TypeMappingTable::with_overlay(&[TypeMapping::new("inet", "IP").package("net")]);

        let file = Generator::new(GenerateOptions::new("model"))
            .generate(&[table], &TypeResolver::new(&mappings))
            .unwrap();

        assert!(file.source.contains("import \"net\"\n"));
        assert!(file.source.contains("\tAddress net.IP\n"));
    }

    #[test]
    fn test_duplicate_struct_name() {
        let tables = [Table::new("users"), Table::new("user")];

        let err = generate(&tables, GenerateOptions::new("model")).unwrap_err();

        assert_eq!(
            err,
            Error::DuplicateIdentifier {
                kind: "struct",
                name: "User".into(),
                first: "users".into(),
                second: "user".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_field_name() {
        let table = Table::new("users")
            .column(Column::new("user_id", "integer", 1))
            .column(Column::new("userId", "integer", 2));

        let err = generate(&[table], GenerateOptions::new("model")).unwrap_err();

        assert!(matches!(err, Error::DuplicateIdentifier { kind: "field", .. }));
    }

    #[test]
    fn test_invalid_identifier() {
        let table = Table::new("users").column(Column::new("2fa_enabled", "boolean", 1));

        let err = generate(&[table], GenerateOptions::new("model")).unwrap_err();

        assert!(matches!(err, Error::InvalidIdentifier { kind: "field", .. }));
    }

    #[test]
    fn test_import_conflict() {
        let table = Table::new("t")
            .column(Column::new("a", "text", 1).nullable())
            .column(Column::new("b", "inet", 2));
        let mappings = TypeMappingTable::with_overlay(&[
            TypeMapping::new("inet", "Addr").package("example.com/sql"),
        ]);

        let err = Generator::new(GenerateOptions::new("model"))
            .generate(&[table], &TypeResolver::new(&mappings))
            .unwrap_err();

        assert!(matches!(err, Error::ImportConflict { .. }));
    }

    #[test]
    fn test_options_from_config() {
        let config: Config = "package_name = \"entity\"\ntags = [\"db\"]".parse().unwrap();

        let options = GenerateOptions::from(&config);

        assert_eq!(options, GenerateOptions::new("entity").tags(["db"]));
    }
}
