//! Seity CLI
//!
//! Demo driver for the phase-synchronization engine.
//!
//! # Commands
//!
//! - `run`: Seed a population, step it until birth (or the step budget), report
//! - `config`: Print the default configuration as JSON
//!
//! Exit codes: 0 success, 1 runtime error, 4 invalid input or configuration.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Seity - stochastic phase synchronization with coherence-triggered genesis
#[derive(Parser)]
#[command(name = "seity")]
#[command(version)]
#[command(about = "Run the Seity phase-synchronization engine")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation
    ///
    /// Seeds the canonical population, steps until the first birth and
    /// reports coherence along the way:
    ///   seity run --souls 100 --steps 500 --output snapshot.json
    Run(commands::run::RunArgs),
    /// Print the default configuration as JSON
    Config(commands::config::ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args),
        Commands::Config(args) => commands::config::handle_config(args),
    };

    std::process::exit(exit_code);
}
