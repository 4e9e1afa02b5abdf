//! Generation error types and diagnostics.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error during wrapper generation.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum GenerateError {
    #[error("no table member found for pointer type `{pointer_type}`")]
    #[diagnostic(
        code(wrapgen::generate::unresolved_pointer_type),
        help("Add an [[overrides]] entry for this pointer type to wrapgen.toml")
    )]
    UnresolvedPointerType { pointer_type: String },

    #[error("failed to write generated wrappers: {0}")]
    #[diagnostic(code(wrapgen::generate::io))]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            GenerateError::UnresolvedPointerType { pointer_type } => {
                Diagnostic::error(format!(
                    "no table member found for pointer type `{}`",
                    pointer_type
                ))
                .with_context("the signature dump declares it but the table dump does not")
                .with_context("no wrappers were emitted")
                .with_suggestion(format!(
                    "Add `[[overrides]]` with pointer_type = \"{}\" to wrapgen.toml",
                    pointer_type
                ))
                .with_suggestion(suggestions::CHECK_TABLE_LAYOUT)
            }

            GenerateError::Io(err) => Diagnostic::error(format!(
                "failed to write generated wrappers: {}",
                err
            ))
            .with_suggestion(suggestions::CHECK_OUTPUT),
        }
    }
}
