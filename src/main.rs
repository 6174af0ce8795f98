//! pathlabel CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pathlabel::cli::{Cli, Commands};
use pathlabel::commands::{run_label, run_resolve, CommandContext};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Initialize tracing to stderr; stdout stays reserved for command output.
/// May fail if already initialized, which is fine.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "pathlabel=debug" } else { "pathlabel=warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> pathlabel::Result<String> {
    let ctx = CommandContext::from_cli(cli.format, cli.verbose);

    match &cli.command {
        Commands::Label(args) => run_label(args, &ctx),
        Commands::Resolve(args) => run_resolve(args, &ctx),
    }
}
