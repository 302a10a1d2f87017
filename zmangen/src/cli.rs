//! Command-line interface definitions for zmangen.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// zmangen - regenerate zmanim calendar constants, enums and calculations
#[derive(Parser, Debug)]
#[command(name = "zmangen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to zmangen.toml configuration file
    #[arg(short, long, global = true, env = "ZMANGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the constants file
    Constants(ConstantsArgs),

    /// Write the enums file
    Enums(EnumsArgs),

    /// Classify a Java AST dump and print the calculations enum
    Calculations(CalculationsArgs),

    /// Write the constants and enums files (default)
    Generate,

    /// Display the reference tables and configuration
    Info(InfoArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ConstantsArgs {
    /// Output file path (default: {output_path}/constants.rs)
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct EnumsArgs {
    /// Output file path (default: {output_path}/enums.rs)
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct CalculationsArgs {
    /// JSON AST dump of the calendar class (default: {ast_path})
    pub ast: Option<PathBuf>,

    /// Write the enum to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the generated enum (overrides config)
    #[arg(long)]
    pub enum_name: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Show reference table summary
    #[arg(long)]
    pub tables: bool,

    /// Show configuration values
    #[arg(long)]
    pub settings: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}
