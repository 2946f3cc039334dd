mod completions;
mod generate;
mod json;
mod mappings;
mod postgres;

use std::path::{Path, PathBuf};

use chair_config::{Config, DEFAULT_CONFIG_FILE};
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use json::JsonCommand;
use mappings::MappingsCommand;
use postgres::PostgresCommand;

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for chair_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the config, falling back to defaults when the file is missing.
pub(crate) fn load_config(path: &Path) -> Config {
    Config::load_or_default(path).unwrap_or_exit()
}

#[derive(Parser)]
#[command(name = "chair")]
#[command(version)]
#[command(about = "Generate Go structs from database table schemas")]
pub(crate) struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Postgres(cmd) => cmd.run(&self.config),
            Commands::Json(cmd) => cmd.run(&self.config),
            Commands::Mappings(cmd) => cmd.run(&self.config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate structs from a PostgreSQL schema
    Postgres(PostgresCommand),

    /// Generate structs from a JSON schema snapshot
    Json(JsonCommand),

    /// Show the effective type mapping table
    Mappings(MappingsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
