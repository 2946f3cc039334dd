use std::path::Path;

use chair_codegen::TypeMappingTable;
use clap::Args;
use eyre::Result;

use super::load_config;
use crate::reports::{MappingsReport, Report, TerminalOutput};

#[derive(Args)]
pub struct MappingsCommand {
    /// Only show entries for this database type
    #[arg(long)]
    pub db_type: Option<String>,
}

impl MappingsCommand {
    /// Run the mappings command
    pub fn run(&self, config_path: &Path) -> Result<()> {
        let config = load_config(config_path);
        let table = TypeMappingTable::with_overlay(&config.mappings);

        let report = MappingsReport::new(&table, self.db_type.as_deref());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
