use chair_core::TypeMapping;
use indexmap::{Equivalent, IndexMap};
use tracing::debug;

use super::builtin_mappings;

/// Lookup key: the database type exactly as spelled, plus nullability.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingKey {
    pub source_type: String,
    pub nullable: bool,
}

impl MappingKey {
    pub fn new(source_type: impl Into<String>, nullable: bool) -> Self {
        Self {
            source_type: source_type.into(),
            nullable,
        }
    }
}

/// Go type a key resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingTarget {
    /// Type name, possibly with `*` or `[]` modifiers (e.g. `"*Time"`)
    pub target_type: String,
    /// Import path of the package declaring the type
    pub package: Option<String>,
}

impl MappingTarget {
    pub fn new(target_type: impl Into<String>, package: Option<String>) -> Self {
        Self {
            target_type: target_type.into(),
            package,
        }
    }
}

/// Borrowed form of [`MappingKey`] for lookups.
///
/// Hashes exactly like the owned key: same fields, and `&str` hashes like
/// `String`.
#[derive(Hash)]
struct KeyRef<'a> {
    source_type: &'a str,
    nullable: bool,
}

impl Equivalent<MappingKey> for KeyRef<'_> {
    fn equivalent(&self, key: &MappingKey) -> bool {
        self.source_type == key.source_type && self.nullable == key.nullable
    }
}

fn split(mapping: TypeMapping) -> (MappingKey, MappingTarget) {
    (
        MappingKey::new(mapping.db_type, mapping.nullable),
        MappingTarget::new(mapping.go_type, mapping.go_pkg),
    )
}

/// The effective mapping table.
///
/// Keys keep insertion order, so listing the table shows the built-in
/// catalog first followed by entries only the overlay introduced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMappingTable {
    entries: IndexMap<MappingKey, MappingTarget>,
}

impl TypeMappingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding the built-in catalog.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.overlay(builtin_mappings());
        table
    }

    /// Create the built-in catalog with `overlay` applied.
    pub fn with_overlay<'a>(overlay: impl IntoIterator<Item = &'a TypeMapping>) -> Self {
        let mut table = Self::builtin();
        table.overlay(overlay.into_iter().cloned());
        table
    }

    /// Insert a mapping, replacing any entry with the same key in place.
    ///
    /// Returns the target that was replaced.
    pub fn insert(&mut self, mapping: TypeMapping) -> Option<MappingTarget> {
        let (key, target) = split(mapping);
        self.entries.insert(key, target)
    }

    /// Apply mappings in order; later entries win over earlier ones.
    pub fn overlay(&mut self, mappings: impl IntoIterator<Item = TypeMapping>) {
        for mapping in mappings {
            let db_type = mapping.db_type.clone();
            let nullable = mapping.nullable;
            if let Some(previous) = self.insert(mapping) {
                debug!(
                    db_type = %db_type,
                    nullable,
                    previous = %previous.target_type,
                    "mapping overridden"
                );
            }
        }
    }

    /// Look up a key.
    pub fn get(&self, source_type: &str, nullable: bool) -> Option<&MappingTarget> {
        self.entries.get(&KeyRef {
            source_type,
            nullable,
        })
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&MappingKey, &MappingTarget)> {
        self.entries.iter()
    }
}
