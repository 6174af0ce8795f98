//! The `resolve` command: name a single path against existing names

use std::fs;

use crate::assign::{assign_labels_with_registry, AssignOptions};
use crate::cli::{OutputFormat, ResolveArgs};
use crate::commands::label::read_document;
use crate::commands::CommandContext;
use crate::error::{PathLabelError, Result};
use crate::path::{NodePath, PathSegment};
use crate::registry::NameRegistry;
use crate::resolve::resolve_name;

/// Run the resolve command
pub fn run_resolve(args: &ResolveArgs, ctx: &CommandContext) -> Result<String> {
    let path = parse_path(&args.path)?;
    let registry = seed_registry(args, ctx)?;

    // A path the seeding pass already named keeps its name; anything else is
    // resolved fresh against the seeded state.
    let name = match registry.name_for(&path) {
        Some(existing) => existing.to_string(),
        None => resolve_name(&path, &registry),
    };

    if ctx.verbose {
        eprintln!("resolved {} against {} existing names", path, registry.len());
    }

    match ctx.format {
        OutputFormat::Json => {
            let result = serde_json::json!({
                "name": name,
                "path": path,
                "location": path.serialized(),
            });
            serde_json::to_string_pretty(&result).map_err(|e| PathLabelError::InvalidDocument {
                message: format!("result serialization failed: {}", e),
            })
        }
        OutputFormat::Text => Ok(format!("{}\n", name)),
    }
}

/// Parse a JSON-array path expression into a `NodePath`.
fn parse_path(expression: &str) -> Result<NodePath> {
    let segments: Vec<PathSegment> =
        serde_json::from_str(expression).map_err(|e| PathLabelError::InvalidPath {
            message: format!("{} (expected a JSON array of keys and indexes)", e),
        })?;
    NodePath::from_segments(segments).ok_or_else(|| PathLabelError::InvalidPath {
        message: "path must contain at least one segment".to_string(),
    })
}

/// Build the registry the resolution runs against: from a names file, from a
/// document naming pass, or empty.
fn seed_registry(args: &ResolveArgs, ctx: &CommandContext) -> Result<NameRegistry> {
    if let Some(names_path) = &args.names {
        if !names_path.exists() {
            return Err(PathLabelError::FileNotFound {
                path: names_path.display().to_string(),
            });
        }
        let source = fs::read_to_string(names_path)?;
        let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&source)
            .map_err(|e| PathLabelError::InvalidDocument {
                message: e.to_string(),
            })?;
        let mut pairs = Vec::with_capacity(entries.len());
        for (location, value) in entries {
            match value {
                serde_json::Value::String(name) => pairs.push((location, name)),
                other => {
                    return Err(PathLabelError::InvalidDocument {
                        message: format!(
                            "name for {} must be a string, got {}",
                            location, other
                        ),
                    })
                }
            }
        }
        return NameRegistry::from_entries(pairs);
    }

    if let Some(doc_path) = &args.doc {
        let source = read_document(doc_path)?;
        let document: serde_json::Value =
            serde_json::from_str(&source).map_err(|e| PathLabelError::InvalidDocument {
                message: e.to_string(),
            })?;
        let (report, registry) =
            assign_labels_with_registry(&document, &AssignOptions::default());
        if ctx.verbose {
            eprintln!("seeded registry with {} labels from document", report.labels.len());
        }
        return Ok(registry);
    }

    Ok(NameRegistry::new())
}
