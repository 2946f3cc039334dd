use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result, SourceContext, TypeMapping};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "chair.toml";
/// Default output file
pub const DEFAULT_OUTPUT: &str = "model_gen.go";
/// Default Go package of the generated file
pub const DEFAULT_PACKAGE_NAME: &str = "model";
/// Default PostgreSQL schema to introspect
pub const DEFAULT_SCHEMA: &str = "public";

/// Root configuration for chair.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Package clause of the generated file
    #[serde(default = "default_package_name")]
    pub package_name: String,

    /// Path of the generated file
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Struct tag keys, each rendered as `key:"column_name"`
    #[serde(default)]
    pub tags: Vec<String>,

    /// PostgreSQL loader settings
    #[serde(default)]
    pub postgres: PostgresConfig,

    /// User mappings overlaid on the built-in catalog
    #[serde(default)]
    pub mappings: Vec<TypeMapping>,
}

/// `[postgres]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostgresConfig {
    /// Schema whose user tables are generated
    #[serde(default = "default_schema")]
    pub schema: String,
}

fn default_package_name() -> String {
    DEFAULT_PACKAGE_NAME.to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_schema() -> String {
    DEFAULT_SCHEMA.to_string()
}

fn is_not_found(err: &Error) -> bool {
    matches!(err, Error::Io { source, .. } if source.kind() == ErrorKind::NotFound)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package_name: default_package_name(),
            output: default_output(),
            tags: Vec::new(),
            postgres: PostgresConfig::default(),
            mappings: Vec::new(),
        }
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            schema: default_schema(),
        }
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, DEFAULT_CONFIG_FILE)
    }
}

impl Config {
    /// Parse a chair.toml file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse chair.toml content with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let config: Self = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        config.validate(&ctx)?;
        Ok(config)
    }

    /// Parse the config at `path`, falling back to defaults if it does not exist
    ///
    /// Any other read, parse or validation failure is returned.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        match Self::from_file(path) {
            Err(e) if is_not_found(&e) => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            result => result,
        }
    }

    /// Validate the config after parsing
    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        ctx.validate_package_name(&self.package_name)?;

        if self.output.as_os_str().is_empty() {
            return Err(ctx.validation_error("output cannot be empty", None));
        }

        if self.postgres.schema.trim().is_empty() {
            return Err(ctx.validation_error("postgres.schema cannot be empty", None));
        }

        for tag in &self.tags {
            ctx.validate_tag(tag)?;
        }
        for (i, tag) in self.tags.iter().enumerate() {
            if self.tags[..i].contains(tag) {
                return Err(ctx.validation_error(
                    format!("tag key '{}' is listed more than once", tag),
                    ctx.find_span(tag),
                ));
            }
        }

        for (i, mapping) in self.mappings.iter().enumerate() {
            ctx.validate_mapping(i, mapping)?;
        }

        Ok(())
    }
}
