//! Configuration file support for wrapgen.
//!
//! `wrapgen.toml` externalizes everything that changes when the SDK does:
//! input locations, table layout, naming, the known-type list and the
//! override list. Every section is optional; a missing file means all
//! defaults: NVENC naming, known types and overrides, with a type-first
//! table dump. The struct-field dump a binding generator writes needs
//! `[table] layout = "member-first"`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bindings::emitter::DEFAULT_MEMBER_PREFIX;
use crate::bindings::qualify::{DEFAULT_KNOWN_TYPES, DEFAULT_NAMESPACE};
use crate::bindings::{Override, TableLayout};
use crate::ops::GeneratorOptions;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "wrapgen.toml";

/// wrapgen configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Input dump locations
    pub input: InputConfig,

    /// Table dump settings
    pub table: TableConfig,

    /// Naming settings
    pub naming: NamingConfig,

    /// Type qualification settings
    pub types: TypesConfig,

    /// Corrections for known-wrong table entries
    pub overrides: Vec<Override>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            input: InputConfig::default(),
            table: TableConfig::default(),
            naming: NamingConfig::default(),
            types: TypesConfig::default(),
            overrides: Override::defaults(),
        }
    }
}

/// Locations of the two input dumps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Function-pointer table dump
    pub table: PathBuf,

    /// Function-pointer signature dump
    pub signatures: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            table: PathBuf::from("fntable.txt"),
            signatures: PathBuf::from("signatures.txt"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Column order of `pub <a>: <b>,` lines
    pub layout: TableLayout,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Prefix of every table member (e.g. `nvEnc`)
    pub member_prefix: String,

    /// Namespace prepended to SDK-local types (e.g. `crate::sys::`)
    pub namespace: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        NamingConfig {
            member_prefix: DEFAULT_MEMBER_PREFIX.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypesConfig {
    /// Elementary types; each also covers its `*mut` form
    pub known: Vec<String>,
}

impl Default for TypesConfig {
    fn default() -> Self {
        TypesConfig {
            known: DEFAULT_KNOWN_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a file.
    ///
    /// Relative input paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        let mut config: GeneratorConfig = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file doesn't exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("no config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).with_context(|| "failed to serialize config")?;

        crate::util::fs::write_string(path, &contents)
    }

    /// Resolve relative input paths against a base directory.
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.input.table.is_relative() {
            self.input.table = base.join(&self.input.table);
        }
        if self.input.signatures.is_relative() {
            self.input.signatures = base.join(&self.input.signatures);
        }
    }

    /// The in-memory options for a generation run.
    pub fn options(&self) -> GeneratorOptions {
        GeneratorOptions {
            layout: self.table.layout,
            member_prefix: self.naming.member_prefix.clone(),
            namespace: self.naming.namespace.clone(),
            known_types: self.types.known.clone(),
            overrides: self.overrides.clone(),
        }
    }
}
