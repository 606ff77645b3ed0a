//! Core utilities and types for the clientgen generator.
//!
//! This crate provides fundamental types and utilities shared by the
//! front-end model, the IR and the code generators.

mod file;
mod types;
mod utils;

// File operations
pub use file::{File, WriteResult};
// Fundamental types
pub use types::{HttpVerb, TypeRef};
// String utilities
pub use utils::{collapse_whitespace, to_kebab_case};
