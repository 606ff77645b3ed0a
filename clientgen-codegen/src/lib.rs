//! Service extraction and generation pipeline for clientgen.
//!
//! This crate turns front-end declarations into [`ServiceDeclaration`]s and
//! drives language-specific renderers over them.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`extract`] - Route matching, parameter classification, documentation,
//!   method mapping and controller resolution
//! - [`generation`] - Output path derivation
//! - [`language`] - The renderer capability implemented per target language
//! - [`pipeline`] - The generation driver and its report
//! - [`testing`] - Test utilities (feature-gated)
//!
//! [`ServiceDeclaration`]: clientgen_ir::ServiceDeclaration

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

pub mod builder;
mod error;
pub mod extract;
pub mod generation;
pub mod language;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use error::{ControllerFailure, ExtractError};
pub use language::ServiceRenderer;
