//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Deterministic path-to-name resolver for nested JSON documents
#[derive(Parser, Debug)]
#[command(name = "pathlabel")]
#[command(about = "Assigns short, unique, human-readable labels to nodes of a JSON document")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for pathlabel
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Label every addressable node of a JSON document
    #[command(visible_alias = "l")]
    Label(LabelArgs),

    /// Resolve the label for a single path against existing names
    #[command(visible_alias = "r")]
    Resolve(ResolveArgs),
}

/// Arguments for the label command
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Path to a JSON document, or "-" to read from stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Label only scalar leaves (grid columns), skipping containers
    #[arg(long)]
    pub leaves_only: bool,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path expression as a JSON array, e.g. '["users",3,"email"]'
    #[arg(value_name = "PATH")]
    pub path: String,

    /// JSON document whose naming pass seeds the registry
    #[arg(long, value_name = "FILE", conflicts_with = "names")]
    pub doc: Option<PathBuf>,

    /// JSON object of serialized path -> assigned name to seed the registry
    #[arg(long, value_name = "FILE")]
    pub names: Option<PathBuf>,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default for terminal)
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// JSON - standard JSON output for machine parsing
    Json,
}
