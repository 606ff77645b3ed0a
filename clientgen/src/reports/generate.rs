//! Generation report rendering.

use clientgen_codegen::{
    ControllerFailure,
    pipeline::{GenerationReport, Progress},
};
use miette::Diagnostic;

use super::output::{Output, Report};

/// Forwards driver progress to an [`Output`].
pub struct OutputProgress<'a> {
    out: &'a mut dyn Output,
}

impl<'a> OutputProgress<'a> {
    pub fn new(out: &'a mut dyn Output) -> Self {
        Self { out }
    }
}

impl Progress for OutputProgress<'_> {
    fn controller_started(&mut self, controller: &str, path: &str) {
        self.out
            .progress(&format!("Generating {} ({})", path, controller));
    }

    fn controller_failed(&mut self, failure: &ControllerFailure) {
        self.out.error(&format!("{}: {}", failure, failure.error));
        if let Some(help) = failure.error.help() {
            self.out.hint(&help.to_string());
        }
    }
}

/// Summary of a finished run.
#[derive(Debug)]
pub struct GenerateReport<'a> {
    report: &'a GenerationReport,
}

impl<'a> GenerateReport<'a> {
    pub fn new(report: &'a GenerationReport) -> Self {
        Self { report }
    }

    pub fn summary(&self) -> String {
        format!(
            "Generated {} file(s), {} controller(s) failed",
            self.report.written.len(),
            self.report.failures.len()
        )
    }
}

impl Report for GenerateReport<'_> {
    fn render(&self, out: &mut dyn Output) {
        if !self.report.skipped_methods.is_empty() {
            out.newline();
            out.section("Skipped redirect methods");
            for skipped in &self.report.skipped_methods {
                out.list_item(&format!("{}.{}", skipped.controller, skipped.method));
            }
        }

        out.newline();
        out.preformatted(&self.summary());
    }
}
