//! Extraction of service declarations from front-end declarations.
//!
//! Leaf-first: [`route`] and [`params`] are pure helpers, [`docs`] reads XML
//! documentation, [`mapper`] composes them per method, and [`resolver`]
//! decides which methods of a controller are mapped at all.

pub mod docs;
pub mod mapper;
pub mod params;
pub mod resolver;
pub mod route;

pub use docs::extract_documentation;
pub use mapper::{ASYNC_WRAPPERS, REDIRECT_MARKER, effective_return_type, map_method};
pub use params::{Classified, classify};
pub use resolver::{ROOT_CONTROLLER_TYPES, is_externally_callable, resolve_methods};
pub use route::{RouteSegment, placeholders, segments};
