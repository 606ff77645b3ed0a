use std::path::{Path, PathBuf};

/// Services subdirectory below the output root.
pub const DEFAULT_SERVICES_DIR: &str = "app/services";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Root the generated client tree is written under.
    pub output_root: PathBuf,
    /// Assembly name prefix selecting the front-end projects.
    pub project_prefix: String,
    /// Directory below `output_root` that holds the service modules.
    pub services_dir: PathBuf,
}

impl GeneratorConfig {
    pub fn new(output_root: impl Into<PathBuf>, project_prefix: impl Into<String>) -> Self {
        Self {
            output_root: output_root.into(),
            project_prefix: project_prefix.into(),
            services_dir: PathBuf::from(DEFAULT_SERVICES_DIR),
        }
    }

    /// Absolute (or output-root-relative) services root.
    pub fn services_root(&self) -> PathBuf {
        self.output_root.join(&self.services_dir)
    }

    /// Full path of a module given its path relative to the services root.
    pub fn module_file(&self, relative: &Path) -> PathBuf {
        self.services_root().join(relative)
    }
}
