//! Command implementations

pub mod generate;
pub mod init;
pub mod mapping;

use anyhow::Result;

use crate::cli::InputArgs;
use wrapgen::GeneratorConfig;

/// Load the config named on the command line and apply `--table`.
pub fn load_config(input: &InputArgs) -> Result<GeneratorConfig> {
    let mut config = GeneratorConfig::load_or_default(&input.config)?;
    if let Some(ref table) = input.table {
        config.input.table = table.clone();
    }
    Ok(config)
}
