//! Database type to Go type mapping.
//!
//! [`TypeMappingTable`] holds the effective `(db_type, nullable) -> Go type`
//! table: the built-in PostgreSQL catalog with the user's `[[mappings]]`
//! overlaid. [`TypeResolver`] looks columns up in it.

mod builtin;
mod resolver;
mod table;

pub use builtin::builtin_mappings;
pub use resolver::TypeResolver;
pub use table::{MappingKey, MappingTarget, TypeMappingTable};
