//! Command modules for the pathlabel CLI
//!
//! Each module implements one top-level command:
//! - `label` - run a naming pass over a whole document
//! - `resolve` - resolve one path against existing names
//!
//! Command handlers take their respective `Args` struct from `cli.rs` and a
//! shared `CommandContext` for output format and verbosity, and return the
//! text to print on stdout.

pub mod label;
pub mod resolve;

pub use label::run_label;
pub use resolve::run_resolve;

use crate::cli::OutputFormat;

/// Shared context passed to all command handlers
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
}

impl CommandContext {
    /// Create a new CommandContext from CLI args
    pub fn from_cli(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }
}
