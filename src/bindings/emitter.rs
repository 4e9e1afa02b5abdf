//! Emission of wrapper functions.
//!
//! Each wrapper calls the entry point through the function table member
//! resolved for its pointer type, passing the encoder handle first, and
//! turns the returned status code into a `Result`.

use std::fmt;
use std::io::Write;

use super::errors::GenerateError;
use super::naming::NameTransformer;
use super::qualify::TypeQualifier;
use super::types::{FunctionSignature, Mapping};

/// Prefix carried by every member of the stock NVENC function table.
pub const DEFAULT_MEMBER_PREFIX: &str = "nvEnc";

/// A wrapper with every name resolved, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWrapper {
    /// Generated function name
    pub fn_name: String,

    /// Function table member called through
    pub member: String,

    /// Transformed parameter names and qualified types, in order
    pub params: Vec<(String, String)>,
}

impl fmt::Display for GeneratedWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#[inline(always)]")?;
        writeln!(f, "pub(crate) unsafe fn {}(", self.fn_name)?;
        writeln!(f, "    &self,")?;
        for (name, typ) in &self.params {
            writeln!(f, "    {}: {},", name, typ)?;
        }
        writeln!(f, ") -> Result<()> {{")?;
        writeln!(
            f,
            "    let status = (self.functions.{}.unwrap_unchecked())(",
            self.member
        )?;
        writeln!(f, "        self.encoder_ptr.as_ptr(),")?;
        for (name, _) in &self.params {
            writeln!(f, "        {},", name)?;
        }
        writeln!(f, "    );")?;
        writeln!(f, "    match NvEncError::from_nvenc_status(status) {{")?;
        writeln!(f, "        None => Ok(()),")?;
        writeln!(f, "        Some(err) => Err(err),")?;
        writeln!(f, "    }}")?;
        writeln!(f, "}}")
    }
}

/// Resolves signatures against a mapping and writes wrappers.
pub struct CodeEmitter<'a> {
    mapping: &'a Mapping,
    names: NameTransformer,
    qualifier: TypeQualifier,
    member_prefix: String,
}

impl<'a> CodeEmitter<'a> {
    /// Create an emitter over a final mapping.
    pub fn new(mapping: &'a Mapping, qualifier: TypeQualifier) -> Self {
        CodeEmitter {
            mapping,
            names: NameTransformer::new(),
            qualifier,
            member_prefix: DEFAULT_MEMBER_PREFIX.to_string(),
        }
    }

    /// Set the member prefix whose length is sliced off member names.
    pub fn with_member_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.member_prefix = prefix.into();
        self
    }

    /// Resolve one signature into a wrapper.
    pub fn resolve(&self, signature: &FunctionSignature) -> Result<GeneratedWrapper, GenerateError> {
        let member = self.mapping.get(&signature.pointer_type).ok_or_else(|| {
            GenerateError::UnresolvedPointerType {
                pointer_type: signature.pointer_type.clone(),
            }
        })?;

        if !member.starts_with(&self.member_prefix) {
            tracing::warn!(
                "{}: member `{}` does not start with `{}`",
                signature.pointer_type,
                member,
                self.member_prefix
            );
        }
        let stem = member.get(self.member_prefix.len()..).unwrap_or_default();

        let params = signature
            .parameters
            .iter()
            .map(|p| (self.names.transform(&p.name), self.qualifier.qualify(&p.raw_type)))
            .collect();

        Ok(GeneratedWrapper {
            fn_name: self.names.transform(stem),
            member: member.to_string(),
            params,
        })
    }

    /// Write one wrapper per signature, in order.
    ///
    /// Every signature is resolved before anything is written, so an
    /// unresolved pointer type leaves the output untouched.
    pub fn emit<W: Write>(
        &self,
        signatures: &[FunctionSignature],
        out: &mut W,
    ) -> Result<usize, GenerateError> {
        let wrappers = signatures
            .iter()
            .map(|s| self.resolve(s))
            .collect::<Result<Vec<_>, _>>()?;

        for wrapper in &wrappers {
            tracing::debug!("emitting {} via {}", wrapper.fn_name, wrapper.member);
            write!(out, "{}", wrapper)?;
        }

        Ok(wrappers.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::types::ParameterDecl;

    fn mapping() -> Mapping {
        let mut mapping = Mapping::new();
        mapping.insert("pFoo", "nvEncBar");
        mapping.insert("PNVENCCREATEBITSTREAMBUFFER", "nvEncCreateBitstreamBuffer");
        mapping
    }

    #[test]
    fn test_render_simple_wrapper() {
        let mapping = mapping();
        let emitter = CodeEmitter::new(&mapping, TypeQualifier::default());
        let sig = FunctionSignature::new("pFoo").with_param(ParameterDecl::new("x", "u32"));

        let wrapper = emitter.resolve(&sig).unwrap();
        assert_eq!(wrapper.fn_name, "bar");
        assert_eq!(wrapper.member, "nvEncBar");

        let expected = "\
#[inline(always)]
pub(crate) unsafe fn bar(
    &self,
    x: u32,
) -> Result<()> {
    let status = (self.functions.nvEncBar.unwrap_unchecked())(
        self.encoder_ptr.as_ptr(),
        x,
    );
    match NvEncError::from_nvenc_status(status) {
        None => Ok(()),
        Some(err) => Err(err),
    }
}
";
        assert_eq!(wrapper.to_string(), expected);
    }

    #[test]
    fn test_resolve_qualifies_sdk_types() {
        let mapping = mapping();
        let emitter = CodeEmitter::new(&mapping, TypeQualifier::default());
        let sig = FunctionSignature::new("PNVENCCREATEBITSTREAMBUFFER").with_param(
            ParameterDecl::new(
                "createBitstreamBufferParams",
                "*mut NV_ENC_CREATE_BITSTREAM_BUFFER",
            ),
        );

        let wrapper = emitter.resolve(&sig).unwrap();
        assert_eq!(wrapper.fn_name, "create_bitstream_buffer");
        assert_eq!(
            wrapper.params,
            vec![(
                "create_bitstream_buffer_params".to_string(),
                "*mut crate::sys::NV_ENC_CREATE_BITSTREAM_BUFFER".to_string()
            )]
        );
    }

    #[test]
    fn test_render_no_params() {
        let wrapper = GeneratedWrapper {
            fn_name: "destroy_encoder".to_string(),
            member: "nvEncDestroyEncoder".to_string(),
            params: Vec::new(),
        };

        let text = wrapper.to_string();
        assert!(text.contains("pub(crate) unsafe fn destroy_encoder(\n    &self,\n) -> Result<()> {"));
        assert!(text.contains("        self.encoder_ptr.as_ptr(),\n    );"));
    }

    #[test]
    fn test_emit_unresolved_writes_nothing() {
        let mapping = mapping();
        let emitter = CodeEmitter::new(&mapping, TypeQualifier::default());
        let sigs = vec![FunctionSignature::new("pFoo"), FunctionSignature::new("PMISSING")];

        let mut out = Vec::new();
        let err = emitter.emit(&sigs, &mut out).unwrap_err();

        assert!(matches!(
            err,
            GenerateError::UnresolvedPointerType { ref pointer_type } if pointer_type == "PMISSING"
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_emit_preserves_order() {
        let mapping = mapping();
        let emitter = CodeEmitter::new(&mapping, TypeQualifier::default());
        let sigs = vec![
            FunctionSignature::new("PNVENCCREATEBITSTREAMBUFFER"),
            FunctionSignature::new("pFoo"),
        ];

        let mut out = Vec::new();
        let count = emitter.emit(&sigs, &mut out).unwrap();
        assert_eq!(count, 2);

        let text = String::from_utf8(out).unwrap();
        let first = text.find("fn create_bitstream_buffer(").unwrap();
        let second = text.find("fn bar(").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_custom_member_prefix() {
        let mut mapping = Mapping::new();
        mapping.insert("PCU", "cuMemAlloc");
        let emitter =
            CodeEmitter::new(&mapping, TypeQualifier::default()).with_member_prefix("cu");

        let wrapper = emitter.resolve(&FunctionSignature::new("PCU")).unwrap();
        assert_eq!(wrapper.fn_name, "mem_alloc");
    }

    #[test]
    fn test_short_member_name() {
        let mut mapping = Mapping::new();
        mapping.insert("PX", "nv");
        let emitter = CodeEmitter::new(&mapping, TypeQualifier::default());

        let wrapper = emitter.resolve(&FunctionSignature::new("PX")).unwrap();
        assert_eq!(wrapper.fn_name, "");
    }
}
