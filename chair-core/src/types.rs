use serde::{Deserialize, Serialize};

/// A single `(db_type, nullable) -> go_type` mapping entry.
///
/// The pair `(db_type, nullable)` is the lookup key. `db_type` is compared
/// exactly, so `"character varying"` and `"varchar"` are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeMapping {
    /// Column type as reported by the database (e.g. `"integer"`)
    pub db_type: String,
    /// Target type name (e.g. `"NullInt32"`)
    pub go_type: String,
    /// Package providing the target type (e.g. `"database/sql"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_pkg: Option<String>,
    /// Whether this entry applies to nullable columns
    #[serde(default)]
    pub nullable: bool,
}

impl TypeMapping {
    /// Create a mapping for non-nullable columns.
    pub fn new(db_type: impl Into<String>, go_type: impl Into<String>) -> Self {
        Self {
            db_type: db_type.into(),
            go_type: go_type.into(),
            go_pkg: None,
            nullable: false,
        }
    }

    /// Set the package providing the target type.
    pub fn package(mut self, pkg: impl Into<String>) -> Self {
        self.go_pkg = Some(pkg.into());
        self
    }

    /// Mark this entry as applying to nullable columns.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
