//! Render input for one output module.

use serde::Serialize;

use crate::ServiceDeclaration;

/// Everything a renderer needs to produce one controller's client module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceModule {
    /// Owning project's assembly name.
    pub project_name: String,
    /// Number of directories between the services root and the module file.
    pub folder_count: usize,
    /// Services in controller declaration order.
    pub services: Vec<ServiceDeclaration>,
}

impl ServiceModule {
    pub fn new(
        project_name: impl Into<String>,
        folder_count: usize,
        services: Vec<ServiceDeclaration>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            folder_count,
            services,
        }
    }

    /// Relative path prefix from the module file back to the `app` root
    /// (the services root sits one level below it).
    pub fn root_prefix(&self) -> String {
        "../".repeat(self.folder_count + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_prefix_depth() {
        assert_eq!(ServiceModule::new("Acme.Web", 0, Vec::new()).root_prefix(), "../");
        assert_eq!(
            ServiceModule::new("Acme.Web", 2, Vec::new()).root_prefix(),
            "../../../"
        );
    }
}
