//! Output layout and import bookkeeping.
//!
//! - [`ModulePath`] - Where a controller's client module is written
//! - [`ImportCollector`] - Import tracking and deduplication

mod imports;
mod paths;

pub use imports::ImportCollector;
pub use paths::ModulePath;
