//! Go import collection.

use std::collections::{BTreeMap, BTreeSet};

use crate::{CodeBuilder, Error, Result};

/// Tracks the packages referenced by generated fields.
///
/// Paths are kept sorted for deterministic output. Two different paths
/// sharing a qualifier cannot both be imported without aliases, which the
/// generated file never uses, so that is reported as a conflict.
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    paths: BTreeSet<String>,
    /// Qualifier -> import path
    qualifiers: BTreeMap<String, String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import path and return the qualifier it is referenced by.
    pub fn add(&mut self, path: &str) -> Result<String> {
        let qualifier = package_qualifier(path).to_string();

        match self.qualifiers.get(&qualifier) {
            Some(existing) if existing != path => {
                let (first, second) = if existing.as_str() < path {
                    (existing.clone(), path.to_string())
                } else {
                    (path.to_string(), existing.clone())
                };
                return Err(Error::ImportConflict {
                    qualifier,
                    first,
                    second,
                });
            }
            Some(_) => {}
            None => {
                self.qualifiers.insert(qualifier.clone(), path.to_string());
                self.paths.insert(path.to_string());
            }
        }

        Ok(qualifier)
    }

    /// Iterate over import paths in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Render the import declaration.
    ///
    /// A single package uses the one-line form, several use a block.
    /// Nothing is written when no package is imported.
    pub fn render(&self, builder: &mut CodeBuilder) {
        match self.paths.len() {
            0 => {}
            1 => {
                for path in &self.paths {
                    builder.push_line(&format!("import \"{}\"", path));
                }
            }
            _ => {
                builder.push_line("import (").push_indent();
                for path in &self.paths {
                    builder.push_line(&format!("\"{}\"", path));
                }
                builder.push_dedent().push_line(")");
            }
        }
    }
}

/// The name a package is referenced by when imported without an alias.
///
/// This is the last path segment, skipping a major version segment
/// (`github.com/jackc/pgx/v5` -> `pgx`) or suffix (`gopkg.in/yaml.v3` -> `yaml`).
pub fn package_qualifier(path: &str) -> &str {
    let mut segments = path.trim_end_matches('/').rsplit('/');
    let last = segments.next().unwrap_or(path);

    if is_major_version(last) {
        if let Some(previous) = segments.next() {
            return previous;
        }
    }

    match last.rsplit_once('.') {
        Some((name, version)) if !name.is_empty() && is_major_version(version) => name,
        _ => last,
    }
}

fn is_major_version(s: &str) -> bool {
    s.strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}
