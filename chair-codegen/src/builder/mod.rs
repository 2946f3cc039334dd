//! Low-level code building utilities.

mod code_builder;

pub use code_builder::CodeBuilder;
