//! Path-to-name resolution
//!
//! Given a node path and the names already handed out, produce the shortest
//! natural label for that node that is not taken by any other path. A bare
//! key name wins when it can; collisions are disambiguated by prepending
//! ancestor context one segment at a time, walking toward the root.
//!
//! The function is pure: it never mutates the registry, and its output
//! depends only on the path structure and the set of recorded name values —
//! not on registry insertion order. Callers that want future resolutions to
//! respect the result must record it themselves (resolve, then record, in
//! that order, one naming pass at a time).

use crate::path::{NodePath, PathSegment};
use crate::registry::NameRegistry;

/// Resolve a unique human-readable label for the node at `path`.
///
/// The returned label is guaranteed not to equal any name currently recorded
/// in `existing`, unless disambiguation is exhausted: once ancestor context
/// has widened to the full path, the full-path candidate is returned as-is
/// even if it still collides. That degenerate case is the caller's to
/// tolerate — no suffix is invented to force uniqueness.
pub fn resolve_name(path: &NodePath, existing: &NameRegistry) -> String {
    let segments = path.segments();
    let (base, consumed) = base_label(segments);
    if !existing.is_taken(&base) {
        return base;
    }

    // Widen with ancestor context, one segment root-ward per step, starting
    // just outside the window the base label already incorporated.
    let mut candidate = base;
    let mut cursor = segments.len() - consumed;
    while cursor > 0 {
        cursor -= 1;
        let context = match &segments[cursor] {
            PathSegment::Key(key) => humanize(key),
            PathSegment::Index(position) => format!("index-{}", position),
        };
        candidate = format!("{} {}", context, candidate);
        tracing::trace!("widened candidate: {}", candidate);
        if !existing.is_taken(&candidate) {
            return candidate;
        }
    }

    tracing::debug!("disambiguation exhausted for {}, returning {}", path, candidate);
    candidate
}

/// Compute the terminal label for a segment window and how many trailing
/// segments it incorporated.
///
/// - `Key(k)` labels itself, verbatim.
/// - `Index(i)` borrows a `Key` parent as prefix (`"{parent}-{i}"`), falls
///   back to `"index-{i}"` at the root, and space-joins through a run of
///   consecutive `Index` parents recursively (`"index-2 index-1"`).
pub(crate) fn base_label(segments: &[PathSegment]) -> (String, usize) {
    let (last, prefix) = match segments.split_last() {
        Some(parts) => parts,
        // Unreachable for NodePath input; harmless for raw slices.
        None => return (String::new(), 0),
    };
    match last {
        PathSegment::Key(key) => (key.clone(), 1),
        PathSegment::Index(position) => match prefix.last() {
            Some(PathSegment::Key(parent)) => (format!("{}-{}", parent, position), 2),
            Some(PathSegment::Index(_)) => {
                let (outer, outer_consumed) = base_label(prefix);
                (format!("{} index-{}", outer, position), outer_consumed + 1)
            }
            None => (format!("index-{}", position), 1),
        },
    }
}

/// Soften a raw key for use as ancestor context: underscores become spaces.
/// Terminal base labels keep the key verbatim; only widening humanizes.
fn humanize(key: &str) -> String {
    key.replace('_', " ")
}
