//! Type definitions for parsed table and signature dumps.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column order of the function-pointer table dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableLayout {
    /// `pub <PointerTypeName>: <MemberName>,`
    #[default]
    TypeFirst,
    /// `pub <MemberName>: <PointerTypeName>,` as found in generated struct fields
    MemberFirst,
}

/// One line of the table dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    /// Function-pointer type alias name
    pub pointer_type: String,

    /// Field of the function table holding that pointer
    pub member: String,
}

impl TableEntry {
    /// Create a new table entry.
    pub fn new(pointer_type: impl Into<String>, member: impl Into<String>) -> Self {
        TableEntry {
            pointer_type: pointer_type.into(),
            member: member.into(),
        }
    }
}

/// A manual correction for a table entry known to be wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Override {
    /// Pointer type whose mapping is replaced
    pub pointer_type: String,

    /// Member name it must resolve to
    pub member: String,
}

impl Override {
    /// Create a new override.
    pub fn new(pointer_type: impl Into<String>, member: impl Into<String>) -> Self {
        Override {
            pointer_type: pointer_type.into(),
            member: member.into(),
        }
    }

    /// Overrides for entries whose types are wrong in the stock NVENC table.
    pub fn defaults() -> Vec<Override> {
        vec![
            Override::new(
                "PNVENCGETENCODEPROFILEGUIDCOUNT",
                "nvEncGetEncodeProfileGUIDCount",
            ),
            Override::new("PNVENCGETENCODEPROFILEGUIDS", "nvEncGetEncodeProfileGUIDs"),
        ]
    }
}

/// Resolved association from pointer type name to table member name.
///
/// Keys are unique; a later insert for the same pointer type replaces the
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: BTreeMap<String, String>,
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the member for a pointer type, returning the previous member.
    pub fn insert(
        &mut self,
        pointer_type: impl Into<String>,
        member: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(pointer_type.into(), member.into())
    }

    /// Look up the member for a pointer type.
    pub fn get(&self, pointer_type: &str) -> Option<&str> {
        self.entries.get(pointer_type).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries ordered by pointer type name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<TableEntry> for Mapping {
    fn from_iter<I: IntoIterator<Item = TableEntry>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for entry in iter {
            mapping.insert(entry.pointer_type, entry.member);
        }
        mapping
    }
}

/// A single `name: type` parameter of an entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDecl {
    /// Parameter name as written in the dump
    pub name: String,

    /// Type text as written in the dump
    pub raw_type: String,
}

impl ParameterDecl {
    /// Create a new parameter.
    pub fn new(name: impl Into<String>, raw_type: impl Into<String>) -> Self {
        ParameterDecl {
            name: name.into(),
            raw_type: raw_type.into(),
        }
    }
}

/// The parameter list of one function-pointer alias, receiver excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Function-pointer type alias name
    pub pointer_type: String,

    /// Parameters after the encoder handle, in declaration order
    pub parameters: Vec<ParameterDecl>,

    /// Non-empty lines of the parameter block that were not `name: type,`
    pub dropped_lines: Vec<String>,
}

impl FunctionSignature {
    /// Create a signature with no parameters.
    pub fn new(pointer_type: impl Into<String>) -> Self {
        FunctionSignature {
            pointer_type: pointer_type.into(),
            parameters: Vec::new(),
            dropped_lines: Vec::new(),
        }
    }

    /// Add a parameter.
    pub fn with_param(mut self, param: ParameterDecl) -> Self {
        self.parameters.push(param);
        self
    }
}
