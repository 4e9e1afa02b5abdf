//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// wrapgen - generate safe wrappers for an SDK function-pointer table
#[derive(Parser)]
#[command(name = "wrapgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate wrapper functions from the table and signature dumps
    Generate(GenerateArgs),

    /// Print the pointer type to member mapping after overrides
    Mapping(MappingArgs),

    /// Write a default wrapgen.toml
    Init(InitArgs),
}

/// Options shared by commands that read the dumps.
#[derive(Args)]
pub struct InputArgs {
    /// Configuration file
    #[arg(short, long, env = "WRAPGEN_CONFIG", default_value = "wrapgen.toml")]
    pub config: PathBuf,

    /// Function-pointer table dump (overrides the config)
    #[arg(long)]
    pub table: Option<PathBuf>,
}

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Function-pointer signature dump (overrides the config)
    #[arg(long)]
    pub signatures: Option<PathBuf>,

    /// Write wrappers to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MappingFormat {
    /// One `POINTER_TYPE -> member` line per entry
    Text,
    /// A JSON object keyed by pointer type
    Json,
}

#[derive(Args)]
pub struct MappingArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = MappingFormat::Text)]
    pub format: MappingFormat,
}

#[derive(Args)]
pub struct InitArgs {
    /// Directory to write wrapgen.toml into (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Overwrite an existing wrapgen.toml
    #[arg(long)]
    pub force: bool,
}
