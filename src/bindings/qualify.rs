//! Namespace qualification of parameter types.

use std::collections::BTreeSet;

/// Elementary types that never need qualification.
pub const DEFAULT_KNOWN_TYPES: &[&str] = &["u32", "u64", "i32", "i64", "::std::os::raw::c_int"];

/// Namespace prefixed to SDK-local type names.
pub const DEFAULT_NAMESPACE: &str = "crate::sys::";

/// Set of type tokens returned unchanged by the qualifier.
///
/// Every elementary type also contributes its `*mut` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownTypeSet {
    types: BTreeSet<String>,
}

impl Default for KnownTypeSet {
    fn default() -> Self {
        KnownTypeSet::new(DEFAULT_KNOWN_TYPES.iter().copied())
    }
}

impl KnownTypeSet {
    /// Build the set from elementary type names.
    pub fn new<I, S>(elementary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = BTreeSet::new();
        for typ in elementary {
            let typ = typ.as_ref();
            types.insert(format!("*mut {}", typ));
            types.insert(typ.to_string());
        }
        KnownTypeSet { types }
    }

    pub fn contains(&self, typ: &str) -> bool {
        self.types.contains(typ)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Decides whether a raw type needs the SDK namespace.
#[derive(Debug, Clone)]
pub struct TypeQualifier {
    known: KnownTypeSet,
    namespace: String,
}

impl Default for TypeQualifier {
    fn default() -> Self {
        TypeQualifier::new(KnownTypeSet::default(), DEFAULT_NAMESPACE)
    }
}

impl TypeQualifier {
    /// Create a qualifier with the given known types and namespace prefix.
    pub fn new(known: KnownTypeSet, namespace: impl Into<String>) -> Self {
        TypeQualifier {
            known,
            namespace: namespace.into(),
        }
    }

    /// Qualify a raw type.
    ///
    /// Known types are returned as-is. Otherwise only the last
    /// whitespace-separated component gets the namespace; pointer
    /// qualifiers before it are kept verbatim.
    pub fn qualify(&self, raw: &str) -> String {
        if self.known.contains(raw) {
            return raw.to_string();
        }

        let mut parts: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
        match parts.last_mut() {
            Some(base) => *base = format!("{}{}", self.namespace, base),
            None => return raw.to_string(),
        }

        parts.join(" ")
    }
}
