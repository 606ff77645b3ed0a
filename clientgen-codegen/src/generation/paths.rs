//! Output path derivation for controller modules.

use std::path::PathBuf;

use clientgen_core::to_kebab_case;

/// Location of one generated module, relative to the services root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath {
    /// Directory segments, already dash-cased.
    pub directories: Vec<String>,
    /// File name without extension.
    pub file_stem: String,
}

impl ModulePath {
    /// Derive the path for a controller.
    ///
    /// `folders` are the document's folder segments from the project root; the
    /// first level (conventionally `Controllers`) is dropped. When more than
    /// one front end is generated, the project's own segment leads the path so
    /// that same-named controllers do not collide.
    pub fn derive(
        project_name: &str,
        folders: &[String],
        controller_base_name: &str,
        multi_frontend: bool,
    ) -> Self {
        let mut directories = Vec::new();
        if multi_frontend {
            directories.push(to_kebab_case(project_segment(project_name)));
        }
        directories.extend(folders.iter().skip(1).map(|f| to_kebab_case(f)));

        Self {
            directories,
            file_stem: to_kebab_case(controller_base_name),
        }
    }

    /// Number of directories between the services root and the file.
    pub fn folder_count(&self) -> usize {
        self.directories.len()
    }

    /// Path relative to the services root, with the given extension.
    pub fn relative_path(&self, extension: &str) -> PathBuf {
        let mut path: PathBuf = self.directories.iter().collect();
        path.push(format!("{}.{}", self.file_stem, extension));
        path
    }

    /// Forward-slash rendering for progress output, independent of platform.
    pub fn display(&self, extension: &str) -> String {
        let mut parts: Vec<&str> = self.directories.iter().map(String::as_str).collect();
        let file = format!("{}.{}", self.file_stem, extension);
        parts.push(&file);
        parts.join("/")
    }
}

/// Second dot-separated component of an assembly name ("Acme.Admin.Web" ->
/// "Admin"), or the first when there is no second.
fn project_segment(project_name: &str) -> &str {
    let mut parts = project_name.split('.');
    let first = parts.next().unwrap_or(project_name);
    parts.next().filter(|s| !s.is_empty()).unwrap_or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folders(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_multi_frontend_nested_folders() {
        let path = ModulePath::derive(
            "Acme.Shop.Web",
            &folders(&["Controllers", "Admin", "Orders"]),
            "Orders",
            true,
        );
        assert_eq!(path.directories, ["shop", "admin", "orders"]);
        assert_eq!(path.display("ts"), "shop/admin/orders/orders.ts");
        assert_eq!(path.folder_count(), 3);
    }

    #[test]
    fn test_single_frontend_flat() {
        let path = ModulePath::derive(
            "Acme.Shop.Web",
            &folders(&["Controllers"]),
            "OrderLines",
            false,
        );
        assert!(path.directories.is_empty());
        assert_eq!(path.folder_count(), 0);
        assert_eq!(path.relative_path("ts"), PathBuf::from("order-lines.ts"));
    }

    #[test]
    fn test_no_folders_saturates() {
        let path = ModulePath::derive("Acme.Shop.Web", &[], "Orders", true);
        assert_eq!(path.display("ts"), "shop/orders.ts");
        assert_eq!(path.folder_count(), 1);
    }

    #[test]
    fn test_relative_path_nested() {
        let path = ModulePath::derive(
            "Acme.Shop.Web",
            &folders(&["Controllers", "Backoffice"]),
            "UserAccounts",
            false,
        );
        assert_eq!(
            path.relative_path("ts"),
            PathBuf::from("backoffice").join("user-accounts.ts")
        );
    }

    #[test]
    fn test_project_segment() {
        assert_eq!(project_segment("Acme.Admin.Web"), "Admin");
        assert_eq!(project_segment("Acme.Web"), "Web");
        assert_eq!(project_segment("Portal"), "Portal");
        assert_eq!(project_segment("Portal."), "Portal");
    }
}
