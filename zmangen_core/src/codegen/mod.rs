//! Rust source generation from the reference tables.
//!
//! Records are lowered into [`ir`] nodes and rendered in a single pass by
//! [`render`]. Identifier casing lives in [`casing`].

pub mod casing;
pub mod constants;
pub mod enums;
pub mod ir;
pub mod render;

pub use casing::to_identifier_case;
pub use constants::generate_constants_string;
pub use enums::generate_enums_string;

use crate::config::EmitConfig;

/// Comment block at the top of every emitted file.
pub const GENERATED_HEADER: [&str; 2] = [
    "Generated by zmangen from the reference tables.",
    "Do not edit by hand; regenerate instead.",
];

/// Knobs shared by the emitters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Prepended to constant names and plain enum names.
    pub private_prefix: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            private_prefix: "_".to_string(),
        }
    }
}

impl From<&EmitConfig> for EmitOptions {
    fn from(config: &EmitConfig) -> Self {
        Self {
            private_prefix: config.private_prefix.clone(),
        }
    }
}
