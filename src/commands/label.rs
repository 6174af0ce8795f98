//! The `label` command: one naming pass over a whole JSON document

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::assign::{assign_labels, AssignOptions};
use crate::cli::{LabelArgs, OutputFormat};
use crate::commands::CommandContext;
use crate::error::{PathLabelError, Result};
use crate::schema::LabelReport;

/// Run the label command
pub fn run_label(args: &LabelArgs, ctx: &CommandContext) -> Result<String> {
    let source = read_document(&args.input)?;
    let document: serde_json::Value =
        serde_json::from_str(&source).map_err(|e| PathLabelError::InvalidDocument {
            message: e.to_string(),
        })?;

    let options = AssignOptions {
        leaves_only: args.leaves_only,
    };
    let report = assign_labels(&document, &options);

    if ctx.verbose {
        eprintln!(
            "{} labels assigned ({} widened)",
            report.labels.len(),
            report.widened
        );
    }

    match ctx.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&report).map_err(|e| PathLabelError::InvalidDocument {
                message: format!("report serialization failed: {}", e),
            })
        }
        OutputFormat::Text => Ok(render_text(&report)),
    }
}

/// Read the document source from a file, or stdin when the path is "-".
pub(crate) fn read_document(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    if !input.exists() {
        return Err(PathLabelError::FileNotFound {
            path: input.display().to_string(),
        });
    }
    Ok(fs::read_to_string(input)?)
}

/// Render the report as an aligned text table: name, path, kind.
fn render_text(report: &LabelReport) -> String {
    let name_width = report
        .labels
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);
    let path_width = report
        .labels
        .iter()
        .map(|entry| entry.path.to_string().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in &report.labels {
        out.push_str(&format!(
            "{:<name_w$}  {:<path_w$}  {}\n",
            entry.name,
            entry.path.to_string(),
            entry.kind.name(),
            name_w = name_width,
            path_w = path_width,
        ));
    }
    if report.widened > 0 {
        out.push_str(&format!(
            "\n{} of {} labels needed ancestor context\n",
            report.widened,
            report.labels.len()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_doc(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("doc.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_label_text_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_doc(&dir, r#"{"users": ["ada"]}"#);

        let args = LabelArgs {
            input,
            leaves_only: false,
        };
        let output = run_label(&args, &CommandContext::default()).unwrap();

        assert!(output.contains("users"));
        assert!(output.contains("users-0"));
        assert!(output.contains(".users[0]"));
    }

    #[test]
    fn test_label_json_output_parses_as_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_doc(&dir, r#"{"a": {"name": 1}, "b": {"name": 2}}"#);

        let args = LabelArgs {
            input,
            leaves_only: false,
        };
        let ctx = CommandContext {
            format: OutputFormat::Json,
            verbose: false,
        };
        let output = run_label(&args, &ctx).unwrap();

        let report: LabelReport = serde_json::from_str(&output).unwrap();
        assert_eq!(report.widened, 1);
        assert_eq!(report.labels.len(), 4);
    }

    #[test]
    fn test_label_missing_file() {
        let args = LabelArgs {
            input: "/does/not/exist.json".into(),
            leaves_only: false,
        };
        let err = run_label(&args, &CommandContext::default()).unwrap_err();
        assert!(matches!(err, PathLabelError::FileNotFound { .. }));
    }

    #[test]
    fn test_label_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_doc(&dir, "{not json");

        let args = LabelArgs {
            input,
            leaves_only: false,
        };
        let err = run_label(&args, &CommandContext::default()).unwrap_err();
        assert!(matches!(err, PathLabelError::InvalidDocument { .. }));
    }
}
