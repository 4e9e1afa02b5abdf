//! `wrapgen generate` command

use std::io::Write;

use anyhow::{bail, Result};

use super::load_config;
use crate::cli::GenerateArgs;
use wrapgen::ops::{generate, load_inputs};
use wrapgen::util::diagnostic::{self, Diagnostic};
use wrapgen::util::fs;

pub fn execute(args: GenerateArgs, color: bool) -> Result<()> {
    let mut config = load_config(&args.input)?;
    if let Some(ref signatures) = args.signatures {
        config.input.signatures = signatures.clone();
    }

    let inputs = load_inputs(&config)?;

    let mut generated = Vec::new();
    let report = match generate(&inputs, &mut generated) {
        Ok(report) => report,
        Err(e) => {
            let diag = e.to_diagnostic().with_location(&config.input.signatures);
            diagnostic::emit(&diag, color);
            bail!("generation aborted, no wrappers written");
        }
    };

    if !report.dropped_lines.is_empty() {
        let mut diag = Diagnostic::warning(format!(
            "{} parameter line(s) did not match `name: type,` and were left out",
            report.dropped_lines.len()
        ))
        .with_location(&config.input.signatures);
        for dropped in &report.dropped_lines {
            diag = diag.with_context(format!("{}: {}", dropped.pointer_type, dropped.line));
        }
        diagnostic::emit(&diag, color);
    }

    match args.output {
        Some(ref path) => {
            fs::write_string(path, &String::from_utf8(generated)?)?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(&generated)?;
            out.flush()?;
        }
    }

    tracing::info!(
        "generated {} wrappers ({} mapping entries)",
        report.wrappers,
        report.mapping_entries
    );

    Ok(())
}
