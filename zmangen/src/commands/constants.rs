//! Constants command - writes the constants file.

use crate::cli::{Cli, ConstantsArgs};
use crate::commands::load_generator;
use tracing::info;
use zmangen_core::error::Result;

pub fn run(cli: &Cli, args: ConstantsArgs) -> Result<()> {
    let generator = load_generator(cli)?;
    let path = args
        .output
        .unwrap_or_else(|| generator.config().constants_output());

    let file = generator.generate_constants(&path)?;
    info!(
        "Wrote {} constants ({} bytes) to {:?}",
        generator.tables().constants.len(),
        file.bytes_written,
        file.path
    );
    Ok(())
}
