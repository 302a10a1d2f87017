//! Info command - displays the reference tables and configuration.

use crate::cli::{Cli, InfoArgs, InfoFormat};
use crate::commands::load_generator;
use serde_json::json;
use zmangen_core::{Generator, error::Result};

/// Runs the info command.
pub fn run(cli: &Cli, args: InfoArgs) -> Result<()> {
    let generator = load_generator(cli)?;
    // If no specific flags, show all
    let show_all = !args.tables && !args.settings;

    match args.format {
        InfoFormat::Pretty => {
            if args.settings || show_all {
                print!("{}", config_pretty(&generator));
            }
            if args.tables || show_all {
                print!("{}", tables_pretty(&generator));
            }
        }
        InfoFormat::Json => {
            let mut value = json!({});
            if args.settings || show_all {
                value["config"] = serde_json::to_value(generator.config())?;
            }
            if args.tables || show_all {
                value["tables"] = tables_json(&generator);
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn config_pretty(generator: &Generator) -> String {
    let config = generator.config();
    let mut out = String::from("\n=== Configuration ===\n\n");
    out.push_str(&format!("AST Path:        {}\n", config.classify.ast_path));
    out.push_str(&format!("Enum Name:       {}\n", config.classify.enum_name));
    out.push_str(&format!(
        "Constants File:  {}\n",
        config.constants_output().display()
    ));
    out.push_str(&format!(
        "Enums File:      {}\n",
        config.enums_output().display()
    ));
    out.push_str(&format!("Private Prefix:  {:?}\n", config.emit.private_prefix));
    out.push_str(&format!(
        "Tables:          {}\n",
        config.emit.tables_path.as_deref().unwrap_or("(embedded)")
    ));
    out
}

fn tables_pretty(generator: &Generator) -> String {
    let tables = generator.tables();
    let mut out = String::from("\n=== Reference Tables ===\n\n");
    out.push_str(&format!("Constants: {}\n", tables.constants.len()));
    out.push_str("\nEnums:\n");
    for table in &tables.enums {
        out.push_str(&format!("  {:<20} {} members\n", table.name, table.members.len()));
    }
    out.push_str("\nTransliterated Enums:\n");
    for table in &tables.transliterated_enums {
        let marker = if table.follow_up.is_some() { " *" } else { "" };
        out.push_str(&format!(
            "  {:<20} {} members{}\n",
            table.name,
            table.members.len(),
            marker
        ));
    }
    if !generator.follow_ups().is_empty() {
        out.push_str("\n* needs manual follow-up after generation\n");
    }
    out
}

fn tables_json(generator: &Generator) -> serde_json::Value {
    let tables = generator.tables();
    json!({
        "constants": tables.constants.len(),
        "enums": tables
            .enums
            .iter()
            .map(|t| json!({ "name": t.name, "members": t.members.len() }))
            .collect::<Vec<_>>(),
        "transliterated_enums": tables
            .transliterated_enums
            .iter()
            .map(|t| json!({
                "name": t.name,
                "members": t.members.len(),
                "follow_up": t.follow_up,
            }))
            .collect::<Vec<_>>(),
    })
}
