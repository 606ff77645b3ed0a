use std::{path::PathBuf, process::ExitCode};

use clap::Args;
use clientgen_codegen::pipeline::{Driver, GeneratorConfig};
use clientgen_codegen_typescript::TypeScriptRenderer;
use clientgen_model::{SemanticModel, Solution};
use eyre::Result;
use tracing::info;

use super::UnwrapOrExit;
use crate::reports::{GenerateReport, OutputProgress, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    /// Solution snapshot (JSON) exported from the compiled server solution
    pub solution: PathBuf,

    /// Root directory of the client application; modules go under app/services
    pub output_root: PathBuf,

    /// Assembly name prefix of the front-end projects (e.g. "Acme.")
    pub project_prefix: String,
}

impl GenerateCommand {
    /// Run the generator. Exits 1 when any controller failed.
    pub fn run(&self) -> Result<ExitCode> {
        let solution = Solution::open(&self.solution).unwrap_or_exit();
        let config = self.config();
        let frontends = solution.frontends(&config.project_prefix).unwrap_or_exit();
        info!(
            projects = frontends.len(),
            output = %config.services_root().display(),
            "generating service clients"
        );

        let renderer = TypeScriptRenderer::new();
        let mut out = TerminalOutput::new();
        let report = Driver::new(&solution, &renderer, &config)
            .run(&frontends, &mut OutputProgress::new(&mut out));

        GenerateReport::new(&report).render(&mut out);

        Ok(if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }

    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new(&self.output_root, &self.project_prefix)
    }
}
