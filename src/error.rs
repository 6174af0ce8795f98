//! Error types and exit codes for pathlabel
//!
//! Only the outer layer (file IO, document parsing, CLI path expressions,
//! registry bookkeeping) is fallible. The resolver itself is total over
//! well-formed input and returns a plain `String`.

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for pathlabel operations
#[derive(Error, Debug)]
pub enum PathLabelError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid JSON document: {message}")]
    InvalidDocument { message: String },

    #[error("Invalid path expression: {message}")]
    InvalidPath { message: String },

    #[error("Name \"{name}\" is already assigned to {existing_path}")]
    DuplicateName { name: String, existing_path: String },

    #[error("Path {location} is already named \"{existing_name}\"")]
    PathAlreadyNamed {
        location: String,
        existing_name: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PathLabelError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Invalid path expression
    /// - 3: Invalid JSON document
    /// - 4: Registry conflict
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::InvalidPath { .. } => ExitCode::from(2),
            Self::InvalidDocument { .. } => ExitCode::from(3),
            Self::DuplicateName { .. } => ExitCode::from(4),
            Self::PathAlreadyNamed { .. } => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for pathlabel operations
pub type Result<T> = std::result::Result<T, PathLabelError>;
