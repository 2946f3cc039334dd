use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a schema snapshot could not be turned into Go source.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum Error {
    #[error(
        "no type mapping for column '{table}.{column}' of type '{raw_type}' ({})",
        nullability(*nullable)
    )]
    #[diagnostic(
        code(chair::unresolved_type),
        help(
            "add a [[mappings]] entry with db_type = \"{raw_type}\" and nullable = {nullable} to chair.toml"
        )
    )]
    UnresolvedType {
        table: String,
        column: String,
        raw_type: String,
        nullable: bool,
    },

    #[error("{kind} name '{name}' generated from '{source_name}' is not a valid Go identifier")]
    #[diagnostic(
        code(chair::invalid_identifier),
        help("Go identifiers must start with a letter")
    )]
    InvalidIdentifier {
        kind: &'static str,
        name: String,
        source_name: String,
    },

    #[error("{kind} name '{name}' is generated from both '{first}' and '{second}'")]
    #[diagnostic(code(chair::duplicate_identifier))]
    DuplicateIdentifier {
        kind: &'static str,
        name: String,
        first: String,
        second: String,
    },

    #[error("packages '{first}' and '{second}' are both imported as '{qualifier}'")]
    #[diagnostic(
        code(chair::import_conflict),
        help("map one of the types to a different package")
    )]
    ImportConflict {
        qualifier: String,
        first: String,
        second: String,
    },
}

fn nullability(nullable: bool) -> &'static str {
    if nullable { "nullable" } else { "not null" }
}
