//! Core utilities and types for the chair struct generator.
//!
//! This crate provides the identifier transformer (initialism-aware
//! camel-casing and singularization), the type mapping entry shared by the
//! config and codegen crates, and atomic file output.

mod file;
mod inflection;
mod naming;
mod types;

// File operations
pub use file::write_atomic;
// String utilities
pub use inflection::to_singular;
pub use naming::{INITIALISMS, is_initialism, to_upper_camel};
// Fundamental types
pub use types::TypeMapping;
