//! Whole-document naming pass
//!
//! The reference caller for the resolver: walk a JSON document depth-first in
//! document order, build one path per addressable node, and run the
//! resolve-then-record sequence against a single registry so every label in
//! the resulting report is unique. Object key order is preserved by
//! serde_json (`preserve_order`), which keeps the pass deterministic for a
//! given document.

use serde_json::Value;

use crate::path::{NodePath, PathSegment};
use crate::registry::NameRegistry;
use crate::resolve::{base_label, resolve_name};
use crate::schema::{LabelEntry, LabelReport, ValueKind};

/// Options for a naming pass
#[derive(Debug, Clone, Default)]
pub struct AssignOptions {
    /// Label only scalar leaves (grid columns), skipping containers
    pub leaves_only: bool,
}

/// Assign a unique label to every addressable node of `document`.
///
/// The document root itself has no path and is never labeled; every child
/// node, recursively, gets one entry. See [`assign_labels_with_registry`] to
/// also keep the registry the pass built.
pub fn assign_labels(document: &Value, options: &AssignOptions) -> LabelReport {
    assign_labels_with_registry(document, options).0
}

/// Like [`assign_labels`], returning the registry alongside the report so a
/// caller can keep resolving new paths against the same naming state.
pub fn assign_labels_with_registry(
    document: &Value,
    options: &AssignOptions,
) -> (LabelReport, NameRegistry) {
    let mut registry = NameRegistry::new();
    let mut report = LabelReport::new();

    match document {
        Value::Object(fields) => {
            for (key, value) in fields {
                let path = NodePath::new(PathSegment::key(key.clone()));
                visit(path, value, options, &mut registry, &mut report);
            }
        }
        Value::Array(items) => {
            for (position, value) in items.iter().enumerate() {
                let path = NodePath::new(PathSegment::index(position));
                visit(path, value, options, &mut registry, &mut report);
            }
        }
        // A scalar root has no addressable children
        _ => {}
    }

    (report, registry)
}

fn visit(
    path: NodePath,
    value: &Value,
    options: &AssignOptions,
    registry: &mut NameRegistry,
    report: &mut LabelReport,
) {
    let kind = ValueKind::of(value);

    if !options.leaves_only || kind.is_scalar() {
        let name = resolve_name(&path, registry);
        let widened = name != base_label(path.segments()).0;
        if widened {
            report.widened += 1;
            tracing::debug!("widened label for {}: {}", path, name);
        }
        match registry.record(&path, name.clone()) {
            Ok(()) => {}
            Err(err) => {
                // Disambiguation exhausted: emit the colliding entry but keep
                // the registry's unique-name invariant intact.
                tracing::warn!("label collision could not be avoided for {}: {}", path, err);
            }
        }
        report.labels.push(LabelEntry {
            name,
            location: path.serialized(),
            path: path.clone(),
            kind,
            widened,
        });
    }

    match value {
        Value::Object(fields) => {
            for (key, child) in fields {
                visit(
                    path.child(PathSegment::key(key.clone())),
                    child,
                    options,
                    registry,
                    report,
                );
            }
        }
        Value::Array(items) => {
            for (position, child) in items.iter().enumerate() {
                visit(
                    path.child(PathSegment::index(position)),
                    child,
                    options,
                    registry,
                    report,
                );
            }
        }
        _ => {}
    }
}
