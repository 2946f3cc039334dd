//! End-to-end runs through the pipeline against a temporary directory.

use std::{error::Error as _, fs};

use chair_codegen::{Error, Pipeline, RunError, Stage, State};
use chair_config::Config;
use chair_schema::{
    Column, Table,
    testing::{FixtureLoader, character_types},
};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
    Config {
        output: dir.path().join("model_gen.go"),
        ..Config::default()
    }
}

#[test]
fn test_character_types_end_to_end() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);
    let table = Table::new("character_types")
        .column(Column::new("id", "integer", 1))
        .column(Column::new("character_value_nullable", "character", 2).nullable())
        .column(Column::new("text_value", "text", 3));

    let report = Pipeline::new(FixtureLoader::new(vec![table]), &config)
        .run()
        .unwrap();

    assert_eq!(report.table_count, 1);
    assert_eq!(report.field_count, 3);
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "// Code generated by chair. DO NOT EDIT.

package model

import \"database/sql\"

type CharacterType struct {
\tID                     int
\tCharacterValueNullable sql.NullString
\tTextValue              string
}
"
    );
}

#[test]
fn test_unresolved_mapping_leaves_no_file() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);
    let table = Table::new("hosts")
        .column(Column::new("id", "integer", 1))
        .column(Column::new("address", "inet", 2));

    let pipeline = Pipeline::new(FixtureLoader::new(vec![character_types(), table]), &config);
    let err = pipeline.run().unwrap_err();

    match &err {
        RunError::Resolve(Error::UnresolvedType {
            table,
            column,
            raw_type,
            nullable,
        }) => {
            assert_eq!(table, "hosts");
            assert_eq!(column, "address");
            assert_eq!(raw_type, "inet");
            assert!(!nullable);
        }
        other => panic!("expected unresolved type, got {other:?}"),
    }
    assert_eq!(pipeline.state(), State::Failed(Stage::Resolve));
    assert!(!config.output.exists());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_rerun_replaces_output() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);
    fs::write(&config.output, "stale").unwrap();

    Pipeline::new(FixtureLoader::new(vec![character_types()]), &config)
        .run()
        .unwrap();

    let written = fs::read_to_string(&config.output).unwrap();
    assert!(written.starts_with("// Code generated by chair. DO NOT EDIT.\n"));
}

#[test]
fn test_loader_failure_is_reported_verbatim() {
    let temp = TempDir::new().unwrap();
    let config = config_in(&temp);
    let loader = FixtureLoader::failing("permission denied for schema public");

    let err = Pipeline::new(&loader, &config).run().unwrap_err();

    assert_eq!(err.stage(), Stage::Load);
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "failed to connect to the database");
    assert_eq!(
        source.source().unwrap().to_string(),
        "permission denied for schema public"
    );
    assert_eq!(loader.calls(), 1);
}
