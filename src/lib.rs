//! wrapgen - safe wrapper generation for SDK function-pointer tables
//!
//! This crate turns two text dumps of an SDK binding (the function-pointer
//! table struct and the per-entry-point signature aliases) into wrapper
//! routines that call through the table and convert raw status codes into
//! `Result`s.

pub mod bindings;
pub mod ops;
pub mod util;

/// Test fixtures shared by the unit tests.
#[cfg(test)]
pub mod test_support;

pub use bindings::{
    FunctionSignature, GenerateError, Mapping, Override, ParameterDecl, TableEntry, TableLayout,
};
pub use ops::{generate, GenerateInputs, GenerateReport, GeneratorOptions};
pub use util::config::GeneratorConfig;
