//! Validation utilities for chair.toml values

use miette::SourceSpan;

use crate::{Result, SourceContext, TypeMapping};

/// Go reserved keywords that cannot be used as package names
/// Source: https://go.dev/ref/spec#Keywords
pub const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough",
    "for", "func", "go", "goto", "if", "import", "interface", "map", "package", "range",
    "return", "select", "struct", "switch", "type", "var",
];

/// Check if a name is a Go reserved keyword
pub fn is_go_keyword(name: &str) -> bool {
    GO_KEYWORDS.contains(&name)
}

impl SourceContext {
    /// Find the span of a string value in the source.
    pub fn find_span(&self, value: &str) -> Option<SourceSpan> {
        find_value_span(self.src(), value)
    }

    /// Validate the configured Go package name.
    pub(crate) fn validate_package_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = validate_package_name(name) {
            return Err(self.invalid_package_name_error(name, reason, self.find_span(name)));
        }
        Ok(())
    }

    /// Validate one struct tag key.
    pub(crate) fn validate_tag(&self, tag: &str) -> Result<()> {
        if let Some(reason) = validate_tag_key(tag) {
            return Err(self.validation_error(
                format!("invalid tag key '{}': {}", tag, reason),
                self.find_span(tag),
            ));
        }
        Ok(())
    }

    /// Validate one `[[mappings]]` entry.
    pub(crate) fn validate_mapping(&self, index: usize, mapping: &TypeMapping) -> Result<()> {
        if mapping.db_type.trim().is_empty() {
            return Err(self.validation_error(
                format!("mappings[{}]: db_type cannot be empty", index),
                find_empty_key_span(self.src(), "db_type"),
            ));
        }
        if mapping.go_type.trim().is_empty() {
            return Err(self.validation_error(
                format!(
                    "mappings[{}]: go_type cannot be empty for db_type '{}'",
                    index, mapping.db_type
                ),
                find_empty_key_span(self.src(), "go_type"),
            ));
        }
        if mapping.go_pkg.as_deref().is_some_and(|pkg| pkg.trim().is_empty()) {
            return Err(self.validation_error(
                format!(
                    "mappings[{}]: go_pkg cannot be empty for db_type '{}', omit it instead",
                    index, mapping.db_type
                ),
                find_empty_key_span(self.src(), "go_pkg"),
            ));
        }
        Ok(())
    }
}

/// Find the span of a quoted value in the TOML source
/// The span covers the value without its quotes.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }

    let patterns = [format!("\"{}\"", value), format!("'{}'", value)];
    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }

    // Fallback: just find the value anywhere (less precise)
    src.find(value)
        .map(|pos| SourceSpan::from((pos, value.len())))
}

/// Find the span of `key = ""` in the TOML source
fn find_empty_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let patterns = [format!("{} = \"\"", key), format!("{}=\"\"", key)];
    patterns
        .iter()
        .find_map(|pattern| src.find(pattern.as_str()))
        .map(|pos| SourceSpan::from((pos, key.len())))
}

/// Validate that a name is a usable Go package name
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_package_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("package name cannot be empty"),
        Some(c) if c.is_ascii_lowercase() => {}
        Some(c) if c.is_ascii_uppercase() => return Some("package name must be lowercase"),
        Some(_) => return Some("package name must start with a lowercase letter"),
    }

    for c in chars {
        if c.is_ascii_uppercase() {
            return Some("package name must be lowercase");
        }
        if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
            return Some("package name must contain only letters, numbers and underscores");
        }
    }

    if is_go_keyword(name) {
        return Some("package name is a Go reserved keyword");
    }

    None
}

/// Validate that a tag key can be rendered inside a Go struct tag
pub(crate) fn validate_tag_key(tag: &str) -> Option<&'static str> {
    if tag.is_empty() {
        return Some("tag key cannot be empty");
    }
    if tag.chars().any(char::is_whitespace) {
        return Some("tag key cannot contain whitespace");
    }
    if tag.contains(['"', ':', '`']) {
        return Some("tag key cannot contain quotes, colons or backquotes");
    }
    None
}
