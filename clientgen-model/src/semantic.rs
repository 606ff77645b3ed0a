//! Read-only semantic model interface.

use clientgen_core::TypeRef;

use crate::{ClassDecl, DocumentDecl, Error, ProjectDecl, Result};

/// Class name suffix that marks a controller.
pub const CONTROLLER_SUFFIX: &str = "Controller";

/// Assembly name suffix that identifies a front-end project.
pub const FRONTEND_SUFFIX: &str = ".Web";

/// Read access to a loaded solution.
///
/// Implementations must be side-effect free: the generator may call these
/// methods any number of times in any order.
pub trait SemanticModel {
    /// All loaded projects, in load order.
    fn projects(&self) -> &[ProjectDecl];

    /// Locate the declaration a type reference resolves to.
    fn resolve_class(&self, ty: &TypeRef) -> Option<&ClassDecl>;

    /// Select the front-end projects: assembly names starting with `prefix`
    /// and ending with [`FRONTEND_SUFFIX`], in load order.
    fn frontends(&self, prefix: &str) -> Result<Vec<&ProjectDecl>> {
        let projects = self.projects();
        let selected: Vec<_> = projects
            .iter()
            .filter(|p| {
                p.assembly_name.starts_with(prefix) && p.assembly_name.ends_with(FRONTEND_SUFFIX)
            })
            .collect();

        if selected.is_empty() {
            let available = projects
                .iter()
                .map(|p| p.assembly_name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(Box::new(Error::NoMatchingProjects {
                prefix: prefix.to_string(),
                suffix: FRONTEND_SUFFIX.to_string(),
                available: if available.is_empty() {
                    "(none)".to_string()
                } else {
                    available
                },
            }));
        }

        Ok(selected)
    }
}

/// A controller class together with where it was declared.
#[derive(Debug, Clone, Copy)]
pub struct ControllerRef<'a> {
    pub project: &'a ProjectDecl,
    pub document: &'a DocumentDecl,
    pub class: &'a ClassDecl,
}

impl ControllerRef<'_> {
    /// Class name, e.g. "OrdersController".
    pub fn name(&self) -> &str {
        &self.class.name
    }

    /// Class name without the controller suffix, e.g. "Orders".
    pub fn base_name(&self) -> &str {
        self.class
            .name
            .strip_suffix(CONTROLLER_SUFFIX)
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.class.name)
    }
}

/// Enumerate the controllers of the given projects.
///
/// A controller is any non-abstract class whose name ends with
/// [`CONTROLLER_SUFFIX`]. Order follows projects, then documents, then classes.
pub fn controllers<'a>(projects: &[&'a ProjectDecl]) -> Vec<ControllerRef<'a>> {
    projects
        .iter()
        .copied()
        .flat_map(|project| {
            project.documents.iter().flat_map(move |document| {
                document
                    .classes
                    .iter()
                    .filter(|class| !class.is_abstract && class.name.ends_with(CONTROLLER_SUFFIX))
                    .map(move |class| ControllerRef {
                        project,
                        document,
                        class,
                    })
            })
        })
        .collect()
}
