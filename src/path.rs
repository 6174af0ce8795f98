//! Path model for addressing nodes inside a JSON-like document
//!
//! A [`NodePath`] is an ordered, root-to-leaf chain of [`PathSegment`]s and is
//! guaranteed non-empty by construction: every addressable node sits at least
//! one step below the document root, and the resolver's contract starts from
//! that guarantee.

use std::fmt;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// One step in a path: descend by field name or by collection position.
///
/// The serde representation is untagged, so a path exchanged as JSON reads
/// naturally: `["users", 3, "email"]`. Strings deserialize to `Key`,
/// non-negative integers to `Index` — the two JSON types are disjoint, so the
/// encoding stays unambiguous in both directions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Descend into the field named by the string.
    Key(String),
    /// Descend into the element at the position of an ordered collection.
    Index(usize),
}

impl PathSegment {
    /// Convenience constructor for a key segment.
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    /// Convenience constructor for an index segment.
    pub fn index(position: usize) -> Self {
        Self::Index(position)
    }
}

/// An ordered sequence of segments locating one node, root to target.
///
/// Invariant: contains at least one segment. Construction enforces this
/// (`from_segments` returns `None` for an empty vector, serde deserialization
/// fails), so consumers never need to handle the empty case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<PathSegment>", into = "Vec<PathSegment>")]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// Create a single-segment path addressing a top-level node.
    pub fn new(first: PathSegment) -> Self {
        Self {
            segments: vec![first],
        }
    }

    /// Build a path from a segment list. Returns `None` if the list is empty.
    pub fn from_segments(segments: Vec<PathSegment>) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments })
        }
    }

    /// The path one level deeper, descending by `segment`.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Append a segment in place.
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment);
    }

    /// The path to this node's parent, or `None` for a top-level node.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// All segments, outermost first.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The terminal segment (the node being addressed).
    pub fn last(&self) -> &PathSegment {
        // Non-empty by construction
        &self.segments[self.segments.len() - 1]
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false; kept so the type plays well with len()-style callers.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Canonical string key for registry storage.
    ///
    /// Bracket form with JSON-escaped keys: `["users"][3]["email"]`. The
    /// encoding is order- and type-sensitive — `["3"]` (key) and `[3]`
    /// (index) never compare equal.
    pub fn serialized(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => {
                    out.push_str("[\"");
                    for c in key.chars() {
                        match c {
                            '"' => out.push_str("\\\""),
                            '\\' => out.push_str("\\\\"),
                            c if (c as u32) < 0x20 => {
                                let _ = write!(out, "\\u{:04x}", c as u32);
                            }
                            c => out.push(c),
                        }
                    }
                    out.push_str("\"]");
                }
                PathSegment::Index(position) => {
                    let _ = write!(out, "[{}]", position);
                }
            }
        }
        out
    }
}

impl TryFrom<Vec<PathSegment>> for NodePath {
    type Error = String;

    fn try_from(segments: Vec<PathSegment>) -> Result<Self, Self::Error> {
        Self::from_segments(segments).ok_or_else(|| "path must contain at least one segment".into())
    }
}

impl From<NodePath> for Vec<PathSegment> {
    fn from(path: NodePath) -> Self {
        path.segments
    }
}

/// Human-readable dotted form (`.users[3].email`), for logs and text output.
///
/// Not canonical: keys are printed verbatim, so a key containing `.` or `[`
/// is ambiguous here. Use [`NodePath::serialized`] for registry keys.
impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(position) => write!(f, "[{}]", position)?,
            }
        }
        Ok(())
    }
}
