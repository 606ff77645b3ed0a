use std::{path::Path, str::FromStr};

use clientgen_core::TypeRef;
use serde::Deserialize;

use crate::{ClassDecl, Error, ProjectDecl, Result, SemanticModel};

/// An immutable snapshot of a compiled solution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Solution {
    #[serde(default)]
    projects: Vec<ProjectDecl>,
}

impl Solution {
    pub fn new(projects: Vec<ProjectDecl>) -> Self {
        Self { projects }
    }

    /// Open and parse a solution snapshot file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a snapshot with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }
}

impl FromStr for Solution {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "solution.json")
    }
}

impl SemanticModel for Solution {
    fn projects(&self) -> &[ProjectDecl] {
        &self.projects
    }

    fn resolve_class(&self, ty: &TypeRef) -> Option<&ClassDecl> {
        self.projects
            .iter()
            .flat_map(|p| &p.documents)
            .flat_map(|d| &d.classes)
            .find(|c| c.matches(ty))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const SNAPSHOT: &str = r#"{
        "projects": [
            {
                "assembly_name": "Acme.Shared",
                "documents": [
                    {
                        "path": "BaseApiController.cs",
                        "classes": [{ "name": "BaseApiController", "namespace": "Acme.Shared", "is_abstract": true }]
                    }
                ]
            },
            { "assembly_name": "Acme.Admin.Web" },
            { "assembly_name": "Acme.Shop.Web" },
            { "assembly_name": "Acme.Shop.Web.Tests" }
        ]
    }"#;

    #[test]
    fn test_frontends_filter_prefix_and_suffix() {
        let solution = Solution::from_str(SNAPSHOT).unwrap();
        let names: Vec<_> = solution
            .frontends("Acme.")
            .unwrap()
            .iter()
            .map(|p| p.assembly_name.as_str())
            .collect();
        assert_eq!(names, ["Acme.Admin.Web", "Acme.Shop.Web"]);
    }

    #[test]
    fn test_frontends_none_matching() {
        let solution = Solution::from_str(SNAPSHOT).unwrap();
        let err = solution.frontends("Contoso.").unwrap_err();
        match *err {
            Error::NoMatchingProjects { available, .. } => {
                assert!(available.contains("Acme.Shop.Web"));
            }
            other => panic!("expected NoMatchingProjects, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_class_across_projects() {
        let solution = Solution::from_str(SNAPSHOT).unwrap();
        let class = solution
            .resolve_class(&TypeRef::named("BaseApiController").in_namespace("Acme.Shared"))
            .unwrap();
        assert!(class.is_abstract);
        assert!(solution.resolve_class(&TypeRef::named("Missing")).is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Solution::open(temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("solution.json");
        std::fs::write(&path, SNAPSHOT).unwrap();

        let solution = Solution::open(&path).unwrap();
        assert_eq!(solution.projects().len(), 4);
    }

    #[test]
    fn test_malformed_snapshot() {
        let err = Solution::from_str(r#"{ "projects": [ { "documents": [] } ] }"#).unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
