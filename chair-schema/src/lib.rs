//! Schema model for the chair struct generator.
//!
//! A [`SchemaLoader`] produces a snapshot of [`Table`]s once per run. The
//! model is vendor-independent: the PostgreSQL loader, the JSON snapshot
//! loader and the in-memory fixtures all produce the same types.
//!
//! # Architecture
//!
//! ```text
//! database / snapshot → SchemaLoader → Vec<Table> → chair-codegen
//! ```

mod loader;
mod model;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use loader::{BoxError, JsonLoader, LoaderError, SchemaLoader};
pub use model::{Column, Table};
