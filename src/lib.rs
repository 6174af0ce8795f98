//! pathlabel: deterministic path-to-name resolution for nested JSON documents
//!
//! Given a location inside a JSON-like tree (an ordered chain of key/index
//! steps) and the set of names already handed out, [`resolve_name`] produces
//! a short, human-readable label that is unique across the whole naming pass.
//! A bare key name wins when it can; collisions are disambiguated by
//! prepending ancestor context one segment at a time.
//!
//! The resolver is a pure function over caller-owned state: it never mutates
//! the registry, and identical inputs always produce identical output. The
//! caller records each result before resolving the next path.
//!
//! # Example
//!
//! ```ignore
//! use pathlabel::{resolve_name, NameRegistry, NodePath, PathSegment};
//!
//! let mut registry = NameRegistry::new();
//!
//! let first = NodePath::new(PathSegment::key("first")).child(PathSegment::key("name"));
//! let name = resolve_name(&first, &registry); // "name"
//! registry.record(&first, name)?;
//!
//! let second = NodePath::new(PathSegment::key("second")).child(PathSegment::key("name"));
//! let name = resolve_name(&second, &registry); // "second name"
//! registry.record(&second, name)?;
//! ```
//!
//! For labeling a whole document in one pass, see [`assign_labels`].

pub mod assign;
pub mod cli;
pub mod commands;
pub mod error;
pub mod path;
pub mod registry;
pub mod resolve;
pub mod schema;

// Re-export commonly used types
pub use assign::{assign_labels, assign_labels_with_registry, AssignOptions};
pub use cli::{Cli, Commands, OutputFormat};
pub use error::{PathLabelError, Result};
pub use path::{NodePath, PathSegment};
pub use registry::NameRegistry;
pub use resolve::resolve_name;
pub use schema::{LabelEntry, LabelReport, ValueKind, SCHEMA_VERSION};
