//! High-level operations.
//!
//! This module contains the implementation of wrapgen commands.

pub mod generate;

pub use generate::{
    build_mapping, generate, load_inputs, DroppedLine, GenerateInputs, GenerateReport,
    GeneratorOptions,
};
