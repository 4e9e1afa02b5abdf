//! wrapgen CLI - generates SDK wrapper routines from table and signature dumps

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Logs go to stderr so generated code on stdout stays clean
    let filter = if cli.verbose {
        EnvFilter::new("wrapgen=debug")
    } else {
        EnvFilter::new("wrapgen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let color = !cli.no_color;

    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args, color),
        Commands::Mapping(args) => commands::mapping::execute(args),
        Commands::Init(args) => commands::init::execute(args),
    }
}
