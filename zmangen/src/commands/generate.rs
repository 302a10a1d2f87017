//! Generate command - writes the constants and enums files.

use crate::cli::Cli;
use crate::commands::{load_generator, report_follow_ups};
use tracing::info;
use zmangen_core::error::Result;

/// Runs the full generation with the configured output paths.
pub fn run(cli: &Cli) -> Result<()> {
    info!("Starting zmangen code generation");
    let generator = load_generator(cli)?;

    let report = generator.generate_all()?;
    for file in &report.files {
        info!(
            "{:?}: {} bytes written to {:?}",
            file.kind, file.bytes_written, file.path
        );
    }
    report_follow_ups(&generator);

    info!("zmangen code generation completed successfully");
    Ok(())
}
