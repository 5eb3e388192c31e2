//! # srcmeta CLI Entry Point
//!
//! Assembles subcommands, dispatches to handler modules, and performs the
//! process exit the core deliberately leaves to its driver.

use clap::Parser;
use srcmeta_core::ControlDecision;

/// srcmeta — build-metadata extraction support for Rust sources.
///
/// Resolves embedded-resource references (`include_str!`/`include_bytes!`
/// arguments) to build-root-relative paths and normalizes string sets for
/// deterministic build-file generation.
#[derive(Parser, Debug)]
#[command(name = "srcmeta", version, about)]
struct Cli {
    /// Escalate warnings and errors to a failing exit.
    #[arg(long, global = true)]
    strict: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve embedded-resource references to build-root-relative paths.
    Resolve(srcmeta_cli::resolve::ResolveArgs),
    /// Deduplicate and sort a list of strings.
    Normalize(srcmeta_cli::normalize::NormalizeArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let decision = match cli.command {
        Commands::Resolve(args) => srcmeta_cli::resolve::run(&args, cli.strict)?,
        Commands::Normalize(args) => {
            srcmeta_cli::normalize::run(args)?;
            ControlDecision::Continue
        }
    };

    // Diagnostics have already been emitted; Halt only maps to exit status.
    if decision.is_halt() {
        std::process::exit(1);
    }
    Ok(())
}
