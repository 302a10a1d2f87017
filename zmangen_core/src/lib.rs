// zmangen - source generation for a zmanim calendar crate

pub mod ast;
pub mod classifier;
pub mod codegen;
pub mod config;
pub mod error;
pub mod tables;
pub mod tooling;

// Re-export commonly used items for convenience
pub use classifier::{MethodBuckets, classify};
pub use config::ZmangenConfig;
pub use error::{Result, ZmangenError};
pub use tables::ReferenceTables;
pub use tooling::{GenerationReport, Generator};
