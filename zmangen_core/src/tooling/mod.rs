//! Generation driver and convenience entry point.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! fn main() {
//!     zmangen_core::tooling::generate().expect("generation failed");
//! }
//! ```

mod generator;

pub use generator::*;

use crate::config::ZmangenConfig;
use crate::error::Result;

/// Generates the constants and enums files using configuration from
/// `zmangen.toml` (searched from the current directory upward), or the
/// defaults when no file exists.
pub fn generate() -> Result<GenerationReport> {
    let config = ZmangenConfig::new()?;
    Generator::from_config(config)?.generate_all()
}
