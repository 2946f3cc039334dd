//! Generation pipeline.
//!
//! The [`Pipeline`] runs one generation pass end to end:
//!
//! - load the schema snapshot through a [`SchemaLoader`](chair_schema::SchemaLoader)
//! - resolve every column and render the Go source
//! - write the file atomically
//!
//! Each stage is bracketed by [`Plugin`] hooks, and the first failure stops
//! the run in [`State::Failed`] with the failing [`Stage`].
//!
//! # Example
//!
//! ```ignore
//! use chair_codegen::pipeline::Pipeline;
//!
//! let pipeline = Pipeline::new(loader, &config);
//! let report = pipeline.run()?;
//! println!("wrote {} structs to {}", report.table_count, report.output.display());
//! ```

mod plugin;
mod runner;
mod stage;

pub use plugin::Plugin;
pub use runner::{Pipeline, RunError, RunReport};
pub use stage::{Stage, State};
