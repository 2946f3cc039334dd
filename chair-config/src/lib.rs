// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration for the chair struct generator.
//!
//! The configuration lives in a `chair.toml` file:
//!
//! ```toml
//! package_name = "model"
//! output = "model_gen.go"
//! tags = ["db"]
//!
//! [postgres]
//! schema = "public"
//!
//! [[mappings]]
//! db_type = "timestamp without time zone"
//! go_type = "Time"
//! go_pkg = "github.com/guregu/null"
//! nullable = true
//! ```

mod config;
mod error;
mod validate;

pub use chair_core::TypeMapping;
pub use config::{
    Config, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT, DEFAULT_PACKAGE_NAME, DEFAULT_SCHEMA,
    PostgresConfig,
};
pub use error::{Error, Result, SourceContext};
pub use validate::{GO_KEYWORDS, is_go_keyword};
