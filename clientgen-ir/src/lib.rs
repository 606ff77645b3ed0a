//! Intermediate representation types for the clientgen generator.
//!
//! These types are the single source of truth handed from extraction to
//! rendering.
//!
//! # Architecture
//!
//! ```text
//! solution snapshot → clientgen-model (front end) → clientgen-ir (services) → renderer
//! ```
//!
//! The IR is language-agnostic: nothing here knows about C# attributes or
//! TypeScript syntax.

mod module;
mod service;

pub use clientgen_core::{HttpVerb, TypeRef};
pub use module::ServiceModule;
pub use service::{Documentation, ParamDoc, Parameter, ServiceDeclaration};
