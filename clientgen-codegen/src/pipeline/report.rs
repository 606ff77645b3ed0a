use std::path::PathBuf;

use clientgen_core::WriteResult;

use crate::ControllerFailure;

/// A module file produced for a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub controller: String,
    pub path: PathBuf,
    /// Whether the file changed on disk.
    pub result: WriteResult,
    /// Number of services in the module.
    pub services: usize,
}

/// A method dropped without error (redirect results).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMethod {
    pub controller: String,
    pub method: String,
}

/// Outcome of a generation run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub written: Vec<WrittenFile>,
    pub skipped_methods: Vec<SkippedMethod>,
    pub failures: Vec<ControllerFailure>,
}

impl GenerationReport {
    /// True when no controller failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Files whose content changed on disk.
    pub fn changed(&self) -> impl Iterator<Item = &WrittenFile> {
        self.written
            .iter()
            .filter(|f| f.result == WriteResult::Written)
    }
}
