//! In-memory name registry for conflict-aware labeling
//!
//! Tracks the mapping between serialized node paths and the names already
//! assigned to them, in both directions. The forward map answers "what is
//! this path called", the reverse map answers "is this name taken" in O(1),
//! which is the hot question during resolution.
//!
//! The registry is a caller-owned value: one naming pass builds one registry,
//! records into it after each resolution, and discards it when the underlying
//! document changes. Nothing here persists.

use std::collections::HashMap;

use crate::error::{PathLabelError, Result};
use crate::path::NodePath;

/// Bidirectional path/name registry.
///
/// Invariants, enforced by [`NameRegistry::record`]:
/// - at most one name per distinct path,
/// - recorded names are pairwise distinct.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    /// serialized path -> assigned name
    names_by_path: HashMap<String, String>,
    /// assigned name -> serialized path (reverse lookup for conflict checks)
    paths_by_name: HashMap<String, String>,
}

impl NameRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(serialized_path, name)` pairs, applying the
    /// same conflict rules as [`NameRegistry::record`].
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut registry = Self::new();
        for (location, name) in entries {
            registry.record_serialized(location, name)?;
        }
        Ok(registry)
    }

    /// Record the name assigned to `path`.
    ///
    /// Recording the same name for the same path again is idempotent.
    /// A different name for an already-named path, or a name already taken
    /// by another path, is rejected — never silently overwritten.
    pub fn record(&mut self, path: &NodePath, name: impl Into<String>) -> Result<()> {
        self.record_serialized(path.serialized(), name.into())
    }

    fn record_serialized(&mut self, location: String, name: String) -> Result<()> {
        if let Some(existing) = self.names_by_path.get(&location) {
            if *existing == name {
                return Ok(());
            }
            return Err(PathLabelError::PathAlreadyNamed {
                location,
                existing_name: existing.clone(),
            });
        }
        if let Some(existing_path) = self.paths_by_name.get(&name) {
            return Err(PathLabelError::DuplicateName {
                name,
                existing_path: existing_path.clone(),
            });
        }
        self.names_by_path.insert(location.clone(), name.clone());
        self.paths_by_name.insert(name, location);
        Ok(())
    }

    /// Name assigned to `path`, if any.
    pub fn name_for(&self, path: &NodePath) -> Option<&str> {
        self.names_by_path.get(&path.serialized()).map(String::as_str)
    }

    /// Serialized path a name is assigned to (reverse lookup).
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.paths_by_name.get(name).map(String::as_str)
    }

    /// Whether `name` is already assigned to any path.
    pub fn is_taken(&self, name: &str) -> bool {
        self.paths_by_name.contains_key(name)
    }

    /// Number of recorded assignments.
    pub fn len(&self) -> usize {
        self.names_by_path.len()
    }

    /// Whether the registry holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.names_by_path.is_empty()
    }

    /// Iterate over `(serialized_path, name)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names_by_path
            .iter()
            .map(|(path, name)| (path.as_str(), name.as_str()))
    }
}
