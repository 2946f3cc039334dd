// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Go struct generation for the chair struct generator.
//!
//! # Module Organization
//!
//! - [`builder`] - Tab-indented code building (CodeBuilder)
//! - [`mapping`] - The type mapping table and resolver
//! - [`pipeline`] - The load, resolve, write orchestrator
//! - [`go`] - Go source rendering (struct alignment, tags, qualifiers)

pub mod builder;
mod error;
mod generator;
pub mod go;
mod imports;
pub mod mapping;
pub mod pipeline;

pub use builder::CodeBuilder;
pub use error::{Error, Result};
pub use generator::{GenerateOptions, GeneratedFile, Generator, ResolvedField, ResolvedTable};
pub use imports::{ImportCollector, package_qualifier};
pub use mapping::{MappingKey, MappingTarget, TypeMappingTable, TypeResolver, builtin_mappings};
pub use pipeline::{Pipeline, Plugin, RunError, RunReport, Stage, State};
