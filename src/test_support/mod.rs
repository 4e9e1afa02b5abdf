//! Test utilities for wrapgen unit tests.
//!
//! Provides small but realistic excerpts of the table and signature dumps
//! so that parser, emitter and pipeline tests share the same inputs.

pub mod fixtures;

pub use fixtures::*;
