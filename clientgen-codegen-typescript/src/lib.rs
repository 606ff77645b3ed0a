//! TypeScript client renderer for clientgen.
//!
//! Renders one [`ServiceModule`] into an ES module with one exported function
//! per service. Functions delegate the actual HTTP call to a `request` helper
//! that the application provides in `app/http.ts`; request and response types
//! are imported from `app/models.ts`.
//!
//! ```ignore
//! use clientgen_codegen::ServiceRenderer;
//! use clientgen_codegen_typescript::TypeScriptRenderer;
//!
//! let source = TypeScriptRenderer::new().render(&module);
//! ```
//!
//! [`ServiceModule`]: clientgen_ir::ServiceModule

mod code_file;
mod generator;
mod naming;
mod type_mapper;

pub mod ast;

pub use ast::{Fn, Import, JsObject, Param};
pub use code_file::{CodeFile, RawCode};
pub use generator::{GENERATED_HEADER, TypeScriptRenderer};
pub use naming::{RESERVED_WORDS, is_reserved, safe_name};
pub use type_mapper::TypeScriptTypeMapper;
