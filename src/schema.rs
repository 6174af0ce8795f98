//! Output data structures for label reports

use serde::{Deserialize, Serialize};

use crate::path::NodePath;

/// Current schema version for output stability
pub const SCHEMA_VERSION: &str = "1.0";

/// Shape of the JSON value a label points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// Classify a JSON value.
    pub fn of(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(_) => Self::Bool,
            serde_json::Value::Number(_) => Self::Number,
            serde_json::Value::String(_) => Self::String,
            serde_json::Value::Array(_) => Self::Array,
            serde_json::Value::Object(_) => Self::Object,
        }
    }

    /// Scalar leaves are what a grid renders as cells.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Self::Array | Self::Object)
    }

    /// Lowercase name for text output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

/// One labeled node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry {
    /// Assigned label, unique across the report
    pub name: String,

    /// Path to the node, root to target
    pub path: NodePath,

    /// Canonical serialized path (the registry key)
    pub location: String,

    /// Shape of the value at the node
    pub kind: ValueKind,

    /// Whether ancestor context was needed to disambiguate the name
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub widened: bool,
}

/// Full result of one naming pass over a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelReport {
    /// Schema version of this report format
    pub schema_version: String,

    /// Labels in document (traversal) order
    pub labels: Vec<LabelEntry>,

    /// Number of labels that needed ancestor widening
    pub widened: usize,
}

impl LabelReport {
    /// Empty report with the current schema version.
    pub fn new() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            labels: Vec::new(),
            widened: 0,
        }
    }
}

impl Default for LabelReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    #[test]
    fn test_value_kind_classification() {
        let doc: serde_json::Value =
            serde_json::from_str(r#"{"a": 1, "b": [true], "c": null}"#).unwrap();
        assert_eq!(ValueKind::of(&doc), ValueKind::Object);
        assert_eq!(ValueKind::of(&doc["a"]), ValueKind::Number);
        assert_eq!(ValueKind::of(&doc["b"]), ValueKind::Array);
        assert_eq!(ValueKind::of(&doc["b"][0]), ValueKind::Bool);
        assert_eq!(ValueKind::of(&doc["c"]), ValueKind::Null);
        assert!(ValueKind::Number.is_scalar());
        assert!(!ValueKind::Object.is_scalar());
    }

    #[test]
    fn test_label_entry_serialization_skips_default_widened() {
        let path = NodePath::new(PathSegment::key("users"));
        let entry = LabelEntry {
            name: "users".to_string(),
            location: path.serialized(),
            path,
            kind: ValueKind::Array,
            widened: false,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("widened").is_none());
        assert_eq!(json["kind"], "array");
        assert_eq!(json["path"], serde_json::json!(["users"]));
    }
}
