use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use zmangen::cli::{Cli, Commands};
use zmangen::commands;
use zmangen_core::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match cli.command {
        Some(Commands::Constants(ref args)) => commands::constants::run(&cli, args.clone()),
        Some(Commands::Enums(ref args)) => commands::enums::run(&cli, args.clone()),
        Some(Commands::Calculations(ref args)) => commands::calculations::run(&cli, args.clone()),
        Some(Commands::Info(ref args)) => commands::info::run(&cli, args.clone()),
        Some(Commands::Generate) | None => commands::generate::run(&cli),
    };

    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

/// Set RUST_LOG to override the level chosen by -v / -q.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
