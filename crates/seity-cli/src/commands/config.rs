//! `seity config`: print a configuration as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use seity_core::SeityConfig;
use tracing::error;

use super::{exit_code_for_error, EXIT_SUCCESS};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the morphogenesis preset instead of the default
    #[arg(long)]
    pub morphogenesis: bool,

    /// Validate and echo this JSON configuration file
    #[arg(long, value_name = "FILE", conflicts_with = "morphogenesis")]
    pub check: Option<PathBuf>,
}

/// Execute the config command.
///
/// # Returns
///
/// Exit code:
/// - 0: Configuration printed
/// - 1: Serialization failure
/// - 4: The checked file cannot be parsed or fails validation
pub fn handle_config(args: ConfigArgs) -> i32 {
    match render(&args) {
        Ok(json) => {
            println!("{}", json);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            exit_code_for_error(&e)
        }
    }
}

fn render(args: &ConfigArgs) -> anyhow::Result<String> {
    let config = match &args.check {
        Some(path) => SeityConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None if args.morphogenesis => SeityConfig::morphogenesis_preset(),
        None => SeityConfig::default(),
    };
    Ok(config.to_json_pretty()?)
}
