use std::path::{Path, PathBuf};

use chair_schema::JsonLoader;
use clap::Args;
use eyre::Result;

use super::{generate::GenerateArgs, load_config};

#[derive(Args)]
pub struct JsonCommand {
    /// Schema snapshot: a JSON array of tables
    pub schema: PathBuf,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

impl JsonCommand {
    /// Run the json command
    pub fn run(&self, config_path: &Path) -> Result<()> {
        let config = load_config(config_path);
        self.generate.run(JsonLoader::new(&self.schema), &config)
    }
}
