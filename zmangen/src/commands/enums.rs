//! Enums command - writes the enums file.

use crate::cli::{Cli, EnumsArgs};
use crate::commands::{load_generator, report_follow_ups};
use tracing::info;
use zmangen_core::error::Result;

pub fn run(cli: &Cli, args: EnumsArgs) -> Result<()> {
    let generator = load_generator(cli)?;
    let path = args
        .output
        .unwrap_or_else(|| generator.config().enums_output());

    let file = generator.generate_enums(&path)?;
    info!(
        "Wrote {} enums and {} transliterated enums ({} bytes) to {:?}",
        generator.tables().enums.len(),
        generator.tables().transliterated_enums.len(),
        file.bytes_written,
        file.path
    );
    report_follow_ups(&generator);
    Ok(())
}
