//! Pipeline orchestrator.

use std::{
    cell::Cell,
    path::{Path, PathBuf},
};

use chair_config::Config;
use chair_schema::{LoaderError, SchemaLoader, Table};
use miette::Diagnostic;
use thiserror::Error;
use tracing::{debug, info};

use super::{Plugin, Stage, State};
use crate::{GenerateOptions, GeneratedFile, Generator, TypeMappingTable, TypeResolver};

/// Why a run stopped; the variant names the failing stage.
#[derive(Debug, Error, Diagnostic)]
pub enum RunError {
    #[error("loading the schema failed")]
    Load(#[source] LoaderError),

    #[error("resolving the schema failed")]
    Resolve(
        #[source]
        #[diagnostic_source]
        crate::Error,
    ),

    #[error("writing '{path}' failed")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// The stage the run failed in.
    pub fn stage(&self) -> Stage {
        match self {
            Self::Load(_) => Stage::Load,
            Self::Resolve(_) => Stage::Resolve,
            Self::Write { .. } => Stage::Write,
        }
    }
}

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// File that was written
    pub output: PathBuf,
    pub table_count: usize,
    pub field_count: usize,
    /// Imported package paths, sorted
    pub imports: Vec<String>,
}

/// The generation pipeline orchestrator.
///
/// One run loads the schema exactly once, resolves and renders it in memory,
/// then writes the output in one atomic step. Nothing is retried, and a
/// failed run never leaves a partial file behind.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(loader, &config).plugin(MyPlugin::new());
/// let report = pipeline.run()?;
/// ```
pub struct Pipeline<L> {
    loader: L,
    mappings: TypeMappingTable,
    generator: Generator,
    output: PathBuf,
    plugins: Vec<Box<dyn Plugin>>,
    state: Cell<State>,
}

impl<L: SchemaLoader> Pipeline<L> {
    /// Create a pipeline for `config`, with its mappings overlaid on the
    /// built-in catalog.
    pub fn new(loader: L, config: &Config) -> Self {
        Self {
            loader,
            mappings: TypeMappingTable::with_overlay(&config.mappings),
            generator: Generator::new(GenerateOptions::from(config)),
            output: config.output.clone(),
            plugins: Vec::new(),
            state: Cell::new(State::Idle),
        }
    }

    /// Override the output path.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Add a plugin to receive stage lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// The output path.
    pub fn output_path(&self) -> &Path {
        &self.output
    }

    /// State reached by the most recent run or preview.
    pub fn state(&self) -> State {
        self.state.get()
    }

    /// Load and generate without writing anything.
    pub fn preview(&self) -> Result<GeneratedFile, RunError> {
        let file = self.load_and_generate()?;
        self.transition(State::Previewed);
        Ok(file)
    }

    /// Run the pipeline: load, generate, write.
    ///
    /// # Errors
    ///
    /// Returns the first error, tagged with the stage it happened in.
    pub fn run(&self) -> Result<RunReport, RunError> {
        let file = self.load_and_generate()?;

        self.stage(Stage::Write, || {
            chair_core::write_atomic(&self.output, &file.source).map_err(|source| {
                RunError::Write {
                    path: self.output.clone(),
                    source,
                }
            })
        })?;

        let report = RunReport {
            output: self.output.clone(),
            table_count: file.tables.len(),
            field_count: file.field_count(),
            imports: file.imports,
        };
        info!(
            path = %report.output.display(),
            tables = report.table_count,
            fields = report.field_count,
            "wrote output"
        );
        self.transition(State::Done);
        Ok(report)
    }

    fn load_and_generate(&self) -> Result<GeneratedFile, RunError> {
        self.state.set(State::Idle);

        let tables: Vec<Table> = self.stage(Stage::Load, || {
            self.loader.load_table_schemas().map_err(RunError::Load)
        })?;
        debug!(tables = tables.len(), "loaded schema snapshot");

        self.stage(Stage::Resolve, || {
            let resolver = TypeResolver::new(&self.mappings);
            self.generator
                .generate(&tables, &resolver)
                .map_err(RunError::Resolve)
        })
    }

    /// Run a single stage with plugin hooks.
    fn stage<T>(
        &self,
        stage: Stage,
        f: impl FnOnce() -> Result<T, RunError>,
    ) -> Result<T, RunError> {
        self.transition(State::running(stage));
        for plugin in &self.plugins {
            plugin.on_enter(stage);
        }

        match f() {
            Ok(value) => {
                for plugin in &self.plugins {
                    plugin.on_exit(stage);
                }
                Ok(value)
            }
            Err(err) => {
                self.transition(State::Failed(stage));
                for plugin in &self.plugins {
                    plugin.on_failed(stage, &err);
                }
                Err(err)
            }
        }
    }

    fn transition(&self, to: State) {
        let from = self.state.replace(to);
        debug!(?from, ?to, "pipeline state");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use chair_schema::{
        Column,
        testing::{FixtureLoader, character_types},
    };
    use tempfile::TempDir;

    use super::*;

    struct CountingPlugin {
        enter_count: Arc<AtomicUsize>,
        exit_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let enter = Arc::new(AtomicUsize::new(0));
            let exit = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    enter_count: enter.clone(),
                    exit_count: exit.clone(),
                },
                enter,
                exit,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_enter(&self, _stage: Stage) {
            self.enter_count.fetch_add(1, Ordering::SeqCst);
        }

        fn on_exit(&self, _stage: Stage) {
            self.exit_count.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Records every hook call as `"<hook> <stage>"`.
    #[derive(Clone, Default)]
    struct RecordingPlugin {
        events: Arc<Mutex<Vec<String>>>,
    }

    impl Plugin for RecordingPlugin {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn on_enter(&self, stage: Stage) {
            self.events.lock().unwrap().push(format!("enter {}", stage));
        }

        fn on_exit(&self, stage: Stage) {
            self.events.lock().unwrap().push(format!("exit {}", stage));
        }

        fn on_failed(&self, stage: Stage, _error: &RunError) {
            self.events.lock().unwrap().push(format!("failed {}", stage));
        }
    }

    fn config_in(dir: &TempDir) -> Config {
        Config {
            output: dir.path().join("model_gen.go"),
            ..Config::default()
        }
    }

    #[test]
    fn test_pipeline_writes_output() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let pipeline = Pipeline::new(FixtureLoader::new(vec![character_types()]), &config);

        let report = pipeline.run().unwrap();

        assert_eq!(pipeline.state(), State::Done);
        assert_eq!(report.output, config.output);
        assert_eq!(report.table_count, 1);
        assert_eq!(report.field_count, 7);
        assert_eq!(report.imports, ["database/sql"]);
        let written = std::fs::read_to_string(&config.output).unwrap();
        assert!(written.contains("type CharacterType struct {"));
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let temp = TempDir::new().unwrap();
        let (plugin, enter_count, exit_count) = CountingPlugin::new();

        let config = config_in(&temp);
        let pipeline =
            Pipeline::new(FixtureLoader::new(vec![character_types()]), &config).plugin(plugin);
        pipeline.run().unwrap();

        // 3 stages = 3 enter + 3 exit hooks
        assert_eq!(enter_count.load(Ordering::SeqCst), 3);
        assert_eq!(exit_count.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_loader_failure_skips_generation() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let plugin = RecordingPlugin::default();
        let loader = FixtureLoader::failing("connection refused");

        let pipeline = Pipeline::new(&loader, &config).plugin(plugin.clone());
        let err = pipeline.run().unwrap_err();

        assert_eq!(err.stage(), Stage::Load);
        assert!(matches!(err, RunError::Load(LoaderError::Connect(_))));
        assert_eq!(pipeline.state(), State::Failed(Stage::Load));
        assert_eq!(*plugin.events.lock().unwrap(), ["enter loading", "failed loading"]);
        assert_eq!(loader.calls(), 1);
        assert!(!config.output.exists());
    }

    #[test]
    fn test_unresolved_type_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        std::fs::write(&config.output, "existing").unwrap();
        let table = Table::new("hosts").column(Column::new("address", "inet", 1));

        let pipeline = Pipeline::new(FixtureLoader::new(vec![table]), &config);
        let err = pipeline.run().unwrap_err();

        assert_eq!(err.stage(), Stage::Resolve);
        assert_eq!(err.to_string(), "resolving the schema failed");
        assert_eq!(pipeline.state(), State::Failed(Stage::Resolve));
        assert_eq!(std::fs::read_to_string(&config.output).unwrap(), "existing");
    }

    #[test]
    fn test_missing_output_directory() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("missing").join("model_gen.go");

        let loader = FixtureLoader::new(vec![character_types()]);
        let pipeline = Pipeline::new(loader, &Config::default()).output(&output);
        let err = pipeline.run().unwrap_err();

        assert_eq!(err.stage(), Stage::Write);
        assert!(matches!(err, RunError::Write { ref path, .. } if path == &output));
        assert!(!output.exists());
    }

    #[test]
    fn test_preview_does_not_write() {
        let temp = TempDir::new().unwrap();
        let config = config_in(&temp);
        let plugin = RecordingPlugin::default();

        let pipeline = Pipeline::new(FixtureLoader::new(vec![character_types()]), &config)
            .plugin(plugin.clone());
        let file = pipeline.preview().unwrap();

        assert!(file.source.starts_with("// Code generated by chair. DO NOT EDIT.\n"));
        assert_eq!(pipeline.state(), State::Previewed);
        assert_eq!(
            *plugin.events.lock().unwrap(),
            ["enter loading", "exit loading", "enter resolving", "exit resolving"]
        );
        assert!(!config.output.exists());
    }

    #[test]
    fn test_config_mappings_are_overlaid() {
        let config: Config = r#"
[[mappings]]
db_type = "inet"
go_type = "string"
"#
        .parse()
        .unwrap();

        let loader =
            FixtureLoader::new(vec![Table::new("hosts").column(Column::new("addr", "inet", 1))]);
        let pipeline = Pipeline::new(loader, &config);

        let file = pipeline.preview().unwrap();

        assert!(file.source.contains("\tAddr string\n"));
        assert_eq!(pipeline.output_path(), Path::new("model_gen.go"));
    }
}
