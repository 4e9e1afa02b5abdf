//! Wrapper generation for SDK function-pointer tables.
//!
//! This module provides parsing of the table and signature dumps, name and
//! type rewriting, and emission of the generated wrapper source.

pub mod emitter;
pub mod errors;
pub mod naming;
pub mod overrides;
pub mod parser;
pub mod qualify;
pub mod types;

pub use emitter::{CodeEmitter, GeneratedWrapper};
pub use errors::GenerateError;
pub use naming::NameTransformer;
pub use overrides::apply_overrides;
pub use parser::{SignatureParser, TableParser};
pub use qualify::{KnownTypeSet, TypeQualifier};
pub use types::{FunctionSignature, Mapping, Override, ParameterDecl, TableEntry, TableLayout};
