//! Generate command report data structures.

use std::path::{Path, PathBuf};

use chair_codegen::{GeneratedFile, RunReport};

use super::output::{Output, Report};

/// Report data from one generation run.
#[derive(Debug)]
pub enum GenerateReport {
    /// The file was written to disk.
    Written(RunReport),
    /// Dry-run preview.
    Preview {
        /// Where the file would be written
        output: PathBuf,
        source: String,
        table_count: usize,
        field_count: usize,
    },
}

impl GenerateReport {
    pub fn written(report: RunReport) -> Self {
        Self::Written(report)
    }

    pub fn preview(output: &Path, file: GeneratedFile) -> Self {
        Self::Preview {
            output: output.to_path_buf(),
            table_count: file.tables.len(),
            field_count: file.field_count(),
            source: file.source,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Written(report) => {
                out.line(&format!("Generated {}", report.output.display()));
                out.key_value_indented("structs", &report.table_count.to_string());
                out.key_value_indented("fields", &report.field_count.to_string());
                if !report.imports.is_empty() {
                    out.newline();
                    out.section("Imports");
                    for import in &report.imports {
                        out.list_item(import);
                    }
                }
            }
            Self::Preview {
                output,
                source,
                table_count,
                field_count,
            } => {
                out.divider(&output.display().to_string());
                out.preformatted(source);
                out.divider("Summary");
                out.line(&format!(
                    "{} structs ({} fields) would be written to {}",
                    table_count,
                    field_count,
                    output.display()
                ));
            }
        }
    }
}
