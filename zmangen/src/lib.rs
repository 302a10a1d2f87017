pub mod cli;
pub mod commands;

pub use zmangen_core::{ast, classifier, codegen, config, error, tables, tooling};
