//! The generation driver.
//!
//! [`Driver`] walks the controllers of the selected front-end projects and
//! writes one module per controller, collecting a [`GenerationReport`].
//! Failures are scoped to the controller that raised them.

mod config;
mod driver;
mod report;

pub use config::{DEFAULT_SERVICES_DIR, GeneratorConfig};
pub use driver::{Driver, NoProgress, Progress};
pub use report::{GenerationReport, SkippedMethod, WrittenFile};
