//! Implementation of `wrapgen generate`.
//!
//! The pipeline is pure: the caller supplies both dump texts and the
//! options, and the generated wrappers go to any `Write`.

use std::io::Write;

use crate::bindings::emitter::DEFAULT_MEMBER_PREFIX;
use crate::bindings::qualify::{DEFAULT_KNOWN_TYPES, DEFAULT_NAMESPACE};
use crate::bindings::{
    apply_overrides, CodeEmitter, GenerateError, KnownTypeSet, Mapping, Override,
    SignatureParser, TableLayout, TableParser, TypeQualifier,
};
use crate::util::config::GeneratorConfig;
use crate::util::fs;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Column order of the table dump
    pub layout: TableLayout,

    /// Prefix whose length is sliced off member names
    pub member_prefix: String,

    /// Namespace prefixed to SDK-local types
    pub namespace: String,

    /// Elementary types left unqualified
    pub known_types: Vec<String>,

    /// Corrections applied after the table is parsed
    pub overrides: Vec<Override>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            layout: TableLayout::default(),
            member_prefix: DEFAULT_MEMBER_PREFIX.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            known_types: DEFAULT_KNOWN_TYPES.iter().map(|t| t.to_string()).collect(),
            overrides: Override::defaults(),
        }
    }
}

impl GeneratorOptions {
    fn qualifier(&self) -> TypeQualifier {
        TypeQualifier::new(KnownTypeSet::new(&self.known_types), self.namespace.as_str())
    }
}

/// Everything a generation run reads.
#[derive(Debug, Clone, Default)]
pub struct GenerateInputs {
    /// Function-pointer table dump
    pub table_text: String,

    /// Function-pointer signature dump
    pub signature_text: String,

    pub options: GeneratorOptions,
}

/// A parameter line left out of a wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedLine {
    pub pointer_type: String,
    pub line: String,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Wrappers written
    pub wrappers: usize,

    /// Entries in the final mapping
    pub mapping_entries: usize,

    /// Parameter lines that did not match `name: type,`
    pub dropped_lines: Vec<DroppedLine>,
}

/// Parse the table dump and apply overrides.
pub fn build_mapping(table_text: &str, options: &GeneratorOptions) -> Mapping {
    let parsed = TableParser::new(options.layout)
        .with_member_prefix(&options.member_prefix)
        .parse(table_text);
    apply_overrides(parsed, &options.overrides)
}

/// Generate wrappers for every signature in the dump.
///
/// Fails without writing anything if a signature's pointer type is not in
/// the final mapping.
pub fn generate<W: Write>(
    inputs: &GenerateInputs,
    out: &mut W,
) -> Result<GenerateReport, GenerateError> {
    let options = &inputs.options;
    let mapping = build_mapping(&inputs.table_text, options);
    let signatures = SignatureParser::new().parse(&inputs.signature_text);
    tracing::debug!(
        "{} mapping entries, {} signatures",
        mapping.len(),
        signatures.len()
    );
    if signatures.is_empty() {
        tracing::warn!("signature dump contains no wrapper candidates");
    }

    let emitter =
        CodeEmitter::new(&mapping, options.qualifier()).with_member_prefix(&options.member_prefix);
    let wrappers = emitter.emit(&signatures, out)?;

    let dropped_lines = signatures
        .iter()
        .flat_map(|s| {
            s.dropped_lines.iter().map(|line| DroppedLine {
                pointer_type: s.pointer_type.clone(),
                line: line.clone(),
            })
        })
        .collect();

    Ok(GenerateReport {
        wrappers,
        mapping_entries: mapping.len(),
        dropped_lines,
    })
}

/// Read both dumps named by the configuration.
pub fn load_inputs(config: &GeneratorConfig) -> anyhow::Result<GenerateInputs> {
    let table_text = fs::read_input(&config.input.table, "table dump")?;
    let signature_text = fs::read_input(&config.input.signatures, "signature dump")?;

    Ok(GenerateInputs {
        table_text,
        signature_text,
        options: config.options(),
    })
}
