//! Report data structures for commands.
//!
//! Commands collect data first, then render it to an [`Output`] target.

mod generate;
mod output;

pub use generate::{GenerateReport, OutputProgress};
pub use output::{Report, TerminalOutput};
