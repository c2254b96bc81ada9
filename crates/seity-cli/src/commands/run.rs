//! `seity run`: seed a population and step it toward a birth.
//!
//! # Usage
//!
//! ```bash
//! # Canonical run: 100 souls, seed 42, stop at the first birth
//! seity run
//!
//! # Berry extension plus rich genesis, keep stepping after births
//! seity run --morphogenesis --policy rearm --continue-after-birth --steps 2000
//!
//! # Export the final state for a visualizer
//! seity run --output snapshot.json
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};
use seity_core::{BirthPolicy, GenesisVariant, SeityConfig, SyncEngine};
use serde_json::json;
use tracing::{error, info, warn};

use super::{exit_code_for_error, EXIT_SUCCESS};

/// Birth policy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Fire automatically at the first threshold crossing only
    Once,
    /// Fire automatically on every upward threshold crossing
    Rearm,
    /// Never fire automatically
    Manual,
}

impl From<PolicyArg> for BirthPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Once => BirthPolicy::Once,
            PolicyArg::Rearm => BirthPolicy::Rearm,
            PolicyArg::Manual => BirthPolicy::Manual,
        }
    }
}

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Number of oscillators to seed (overrides the config file)
    #[arg(long)]
    pub souls: Option<usize>,

    /// Maximum number of steps
    #[arg(long, default_value = "500")]
    pub steps: u64,

    /// RNG seed (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Coupling strength K
    #[arg(long)]
    pub coupling: Option<f64>,

    /// Coherence threshold for births
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Birth policy
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Enable the Berry extension and the rich genesis terms
    #[arg(long)]
    pub morphogenesis: bool,

    /// Log progress every N steps (0 = never)
    #[arg(long, default_value = "50")]
    pub report_every: u64,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the final snapshot as JSON
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Keep stepping after a birth until the step budget is spent
    #[arg(long)]
    pub continue_after_birth: bool,

    /// Fire a generation event at the end if the run produced no birth
    #[arg(long)]
    pub trigger_on_exit: bool,
}

/// Execute the run command.
///
/// Prints a JSON summary of the run on stdout.
///
/// # Returns
///
/// Exit code:
/// - 0: Run completed (with or without a birth)
/// - 1: Snapshot export failed
/// - 4: Invalid flags or configuration
pub fn handle_run(args: RunArgs) -> i32 {
    match run(&args) {
        Ok(summary) => {
            println!("{}", summary);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            exit_code_for_error(&e)
        }
    }
}

/// Merge the config file (or defaults) with command-line overrides.
pub fn build_config(args: &RunArgs) -> anyhow::Result<SeityConfig> {
    let mut config = match &args.config {
        Some(path) => SeityConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SeityConfig::default(),
    };

    if let Some(souls) = args.souls {
        config.seeding.count = souls;
    }
    if let Some(seed) = args.seed {
        config.seeding.seed = seed;
    }
    if let Some(k) = args.coupling {
        config.engine.coupling_strength = k;
    }
    if let Some(threshold) = args.threshold {
        config.engine.birth_threshold = threshold;
    }
    if let Some(policy) = args.policy {
        config.engine.birth_policy = policy.into();
    }
    if args.morphogenesis {
        config.berry.enabled = true;
        config.genesis.variant = GenesisVariant::Rich;
    }

    Ok(config)
}

fn run(args: &RunArgs) -> anyhow::Result<serde_json::Value> {
    let config = build_config(args)?;
    let mut engine =
        SyncEngine::from_config(&config).context("building engine from configuration")?;

    info!(
        souls = engine.population().len(),
        seed = config.seeding.seed,
        coupling = config.engine.coupling_strength,
        threshold = config.engine.birth_threshold,
        policy = ?config.engine.birth_policy,
        berry = config.berry.enabled,
        "Starting run"
    );

    let mut births = Vec::new();
    for _ in 0..args.steps {
        let Some(report) = engine.step() else {
            warn!("Population is empty, nothing to step");
            break;
        };

        if args.report_every > 0 && report.step % args.report_every == 0 {
            info!(
                step = report.step,
                coherence = report.coherence,
                mean_phase = report.mean_phase,
                geometric_phase = engine.geometric_phase(),
                "Progress"
            );
        }

        if let Some(generation) = report.birth {
            births.push(generation);
            if !args.continue_after_birth {
                break;
            }
        }
    }

    if births.is_empty() {
        if args.trigger_on_exit {
            let generation = engine.trigger().generation();
            births.push(generation);
        } else {
            warn!(
                steps = engine.steps(),
                coherence = engine.coherence(),
                "No birth within the step budget"
            );
        }
    }

    if let Some(path) = &args.output {
        engine
            .snapshot()
            .write_json(path)
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
        info!(path = %path.display(), "Snapshot written");
    }

    Ok(json!({
        "steps": engine.steps(),
        "souls": engine.population().len(),
        "coherence": engine.coherence(),
        "births": births,
        "generation_id": engine.generation_id(),
        "baseline": engine.baseline(),
        "geometric_phase": engine.geometric_phase(),
        "harmonizing_fraction": engine.population().harmonizing_fraction(),
    }))
}
