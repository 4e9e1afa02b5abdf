//! `wrapgen mapping` command
//!
//! Prints the final mapping so overrides can be audited against the table.

use anyhow::{Context, Result};

use super::load_config;
use crate::cli::{MappingArgs, MappingFormat};
use wrapgen::ops::build_mapping;
use wrapgen::util::fs;

pub fn execute(args: MappingArgs) -> Result<()> {
    let config = load_config(&args.input)?;
    let table_text = fs::read_input(&config.input.table, "table dump")?;
    let mapping = build_mapping(&table_text, &config.options());

    match args.format {
        MappingFormat::Text => {
            for (pointer_type, member) in mapping.iter() {
                println!("{} -> {}", pointer_type, member);
            }
        }
        MappingFormat::Json => {
            let json = serde_json::to_string_pretty(&mapping)
                .context("failed to serialize mapping")?;
            println!("{}", json);
        }
    }

    tracing::info!("{} mapping entries", mapping.len());

    Ok(())
}
