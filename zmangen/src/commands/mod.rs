//! Command handlers for the zmangen CLI.

pub mod calculations;
pub mod constants;
pub mod enums;
pub mod generate;
pub mod info;

use crate::cli::Cli;
use tracing::{debug, error, info};
use zmangen_core::{Generator, ZmangenConfig, error::Result};

/// Loads the configuration named by `--config`, or searches for one.
pub fn load_config(cli: &Cli) -> Result<ZmangenConfig> {
    let loaded = match &cli.config {
        Some(path) => ZmangenConfig::from_path(path),
        None => ZmangenConfig::new(),
    };
    match loaded {
        Ok(config) => {
            info!("Configuration loaded successfully");
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}

/// Builds a generator over the configured reference tables.
pub fn load_generator(cli: &Cli) -> Result<Generator> {
    Generator::from_config(load_config(cli)?)
}

/// Prints every follow-up notice the emitted tables carry to stderr.
///
/// Notices bypass the log filter: `-q` and `RUST_LOG` do not silence them.
pub fn report_follow_ups(generator: &Generator) {
    for follow_up in generator.follow_ups() {
        debug!(table = %follow_up.table, "Reporting follow-up");
        eprintln!("warning: {}: {}", follow_up.table, follow_up.notice);
    }
}
