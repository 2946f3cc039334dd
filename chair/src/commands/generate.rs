use std::path::PathBuf;

use chair_codegen::Pipeline;
use chair_config::Config;
use chair_schema::SchemaLoader;
use clap::Args;
use eyre::Result;
use tracing::debug;

use crate::reports::{GenerateReport, Report, TerminalOutput};

/// Options shared by the generating subcommands.
#[derive(Args)]
pub struct GenerateArgs {
    /// Output file (overrides the config's `output`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the generated source instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Run the pipeline for `loader` and print the report.
    pub fn run(&self, loader: impl SchemaLoader, config: &Config) -> Result<()> {
        let mut pipeline = Pipeline::new(loader, config);
        if let Some(output) = &self.output {
            pipeline = pipeline.output(output);
        }
        debug!(output = %pipeline.output_path().display(), dry_run = self.dry_run, "generating");

        let report = if self.dry_run {
            let file = pipeline.preview()?;
            GenerateReport::preview(pipeline.output_path(), file)
        } else {
            GenerateReport::written(pipeline.run()?)
        };

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
