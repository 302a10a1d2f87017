//! Calculations command - classifies an AST dump and emits the calculations enum.

use crate::cli::{CalculationsArgs, Cli};
use crate::commands::load_config;
use std::path::PathBuf;
use tracing::{debug, info};
use zmangen_core::{Generator, error::Result};

pub fn run(cli: &Cli, args: CalculationsArgs) -> Result<()> {
    let mut config = load_config(cli)?;
    if let Some(enum_name) = args.enum_name {
        config.classify.enum_name = enum_name;
    }
    let ast_path = args
        .ast
        .unwrap_or_else(|| PathBuf::from(&config.classify.ast_path));
    debug!("Classifying {:?}", ast_path);

    // The classifier pass never reads the reference tables.
    let generator = Generator::new(config, Default::default());
    let output = generator.generate_calculations(&ast_path, args.output.as_deref())?;

    match output.file {
        Some(file) => info!(
            "Wrote {} calculations to {:?}",
            output.buckets.zero_arg.len(),
            file.path
        ),
        None => print!("{}", output.source),
    }
    Ok(())
}
