//! Front-end model consumed by the clientgen core.
//!
//! The core never parses C# itself. It reads declarations through the
//! [`SemanticModel`] trait; [`Solution`] implements it over a JSON snapshot
//! exported from a compiled solution.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod decl;
mod error;
mod semantic;
mod solution;

pub use clientgen_core::{HttpVerb, TypeRef};
pub use decl::{
    Attribute, ClassDecl, DocElement, DocNode, DocumentDecl, MethodDecl, ParameterDecl,
    ProjectDecl, Visibility,
};
pub use error::{Error, Result};
pub use semantic::{CONTROLLER_SUFFIX, ControllerRef, FRONTEND_SUFFIX, SemanticModel, controllers};
pub use solution::Solution;
