//! Parsers for the function-pointer table dump and the signature dump.
//!
//! Both inputs are generated text with a narrow, fixed shape. The patterns
//! below define exactly which lines and blocks are accepted; anything else
//! is skipped.

use regex::Regex;

use super::emitter::DEFAULT_MEMBER_PREFIX;
use super::types::{FunctionSignature, Mapping, ParameterDecl, TableEntry, TableLayout};

/// `pub <a>: <b>,` where the column order depends on the table layout.
const TABLE_PATTERN: &str = r"pub (\S+):\s+(\S+),";

/// A `pub type` alias for a function pointer whose first parameter line
/// mentions the encoder handle. `fn(` may sit on the alias line itself or
/// on the line after it. The second group is the rest of the parameter list
/// up to the closing parenthesis.
const SIGNATURE_PATTERN: &str = r"pub type (\S+) = (?:.+\n)?.*fn\(\n.+encoder.+,([^)]+)";

/// One `name: type,` line inside a parameter block.
const PARAM_PATTERN: &str = r"(\S+):\s+(.+),";

/// Dumps written on Windows carry CRLF; every pattern here expects LF.
fn normalize_newlines(content: &str) -> String {
    content.replace("\r\n", "\n")
}

/// Parser for the function-pointer table dump.
pub struct TableParser {
    layout: TableLayout,
    member_prefix: String,
    pattern: Regex,
}

impl Default for TableParser {
    fn default() -> Self {
        TableParser::new(TableLayout::default())
    }
}

impl TableParser {
    /// Create a parser for the given column order.
    pub fn new(layout: TableLayout) -> Self {
        TableParser {
            layout,
            member_prefix: DEFAULT_MEMBER_PREFIX.to_string(),
            pattern: Regex::new(TABLE_PATTERN).expect("table pattern is valid"),
        }
    }

    /// Set the member prefix that marks function-table fields.
    ///
    /// Only consulted for member-first dumps, where other struct fields
    /// such as `pub version: u32,` share the line shape.
    pub fn with_member_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.member_prefix = prefix.into();
        self
    }

    /// Extract every table entry, in file order.
    pub fn entries(&self, content: &str) -> Vec<TableEntry> {
        let content = normalize_newlines(content);

        self.pattern
            .captures_iter(&content)
            .filter_map(|cap| {
                let first = cap.get(1).map_or("", |m| m.as_str());
                let second = cap.get(2).map_or("", |m| m.as_str());

                match self.layout {
                    TableLayout::TypeFirst => Some(TableEntry::new(first, second)),
                    TableLayout::MemberFirst if first.starts_with(&self.member_prefix) => {
                        Some(TableEntry::new(second, first))
                    }
                    TableLayout::MemberFirst => {
                        tracing::debug!("skipping non-function field `{}`", first);
                        None
                    }
                }
            })
            .collect()
    }

    /// Build the mapping from pointer type to member name.
    pub fn parse(&self, content: &str) -> Mapping {
        let mapping: Mapping = self.entries(content).into_iter().collect();
        tracing::debug!("parsed {} table entries", mapping.len());
        mapping
    }
}

/// Parser for the function-pointer signature dump.
pub struct SignatureParser {
    block: Regex,
    param: Regex,
}

impl Default for SignatureParser {
    fn default() -> Self {
        SignatureParser::new()
    }
}

impl SignatureParser {
    /// Create a new signature parser.
    pub fn new() -> Self {
        SignatureParser {
            block: Regex::new(SIGNATURE_PATTERN).expect("signature pattern is valid"),
            param: Regex::new(PARAM_PATTERN).expect("parameter pattern is valid"),
        }
    }

    /// Parse every matching signature, in file order.
    pub fn parse(&self, content: &str) -> Vec<FunctionSignature> {
        let content = normalize_newlines(content);

        self.block
            .captures_iter(&content)
            .map(|cap| {
                let pointer_type = cap.get(1).map_or("", |m| m.as_str());
                let block = cap.get(2).map_or("", |m| m.as_str());
                self.parse_block(pointer_type, block)
            })
            .collect()
    }

    /// Parse the parameter block that follows the encoder handle.
    fn parse_block(&self, pointer_type: &str, block: &str) -> FunctionSignature {
        let mut signature = FunctionSignature::new(pointer_type);

        for line in block.trim().split('\n') {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.param.captures(line) {
                Some(cap) => {
                    let name = cap.get(1).map_or("", |m| m.as_str());
                    let raw_type = cap.get(2).map_or("", |m| m.as_str());
                    signature.parameters.push(ParameterDecl::new(name, raw_type));
                }
                None => {
                    // Kept out of the wrapper, but never silently.
                    tracing::warn!(
                        "{}: dropping parameter line that is not `name: type,`: {}",
                        pointer_type,
                        line
                    );
                    signature.dropped_lines.push(line.to_string());
                }
            }
        }

        signature
    }
}
