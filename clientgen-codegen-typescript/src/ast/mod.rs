//! TypeScript AST builders for imports, functions and object literals.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod fns;
mod imports;
mod objects;

pub use fns::{Fn, Param};
pub use imports::Import;
pub use objects::JsObject;
pub(crate) use objects::string_literal;
