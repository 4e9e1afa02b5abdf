//! `wrapgen init` command

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::cli::InitArgs;
use wrapgen::util::config::CONFIG_FILE;
use wrapgen::GeneratorConfig;

pub fn execute(args: InitArgs) -> Result<()> {
    let dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(CONFIG_FILE);

    if path.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    GeneratorConfig::default().save(&path)?;
    println!("Created {}", path.display());

    Ok(())
}
