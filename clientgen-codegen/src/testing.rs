//! Test utilities for renderers and the driver.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{fmt::Write as _, path::Path};

use clientgen_core::TypeRef;
use clientgen_ir::ServiceModule;
use clientgen_model::{
    Attribute, ClassDecl, DocElement, DocumentDecl, MethodDecl, ParameterDecl, ProjectDecl,
    Visibility,
};
use tempfile::TempDir;

use crate::{ServiceRenderer, pipeline::GeneratorConfig};

/// Renderer that lists each service on one line.
///
/// Output is stable and easy to assert on, independent of any target
/// language's syntax.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListingRenderer;

impl ServiceRenderer for ListingRenderer {
    fn language(&self) -> &'static str {
        "listing"
    }

    fn file_extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, module: &ServiceModule) -> String {
        let mut out = format!("# {} depth={}\n", module.project_name, module.folder_count);
        for service in &module.services {
            let _ = writeln!(
                out,
                "{} {} {} -> {}",
                service.verb, service.route, service.name, service.return_type
            );
        }
        out
    }
}

/// Builder for a public, documented controller action.
#[derive(Debug, Clone)]
pub struct ActionBuilder {
    method: MethodDecl,
}

impl ActionBuilder {
    /// A `[Http<verb>(route)]` action returning `void` with a one-line summary.
    pub fn new(name: &str, verb: &str, route: &str) -> Self {
        Self {
            method: MethodDecl {
                name: name.to_string(),
                visibility: Visibility::Public,
                is_static: false,
                return_type: TypeRef::void(),
                attributes: vec![Attribute::new(format!("Http{verb}")).arg(route)],
                parameters: Vec::new(),
                documentation: vec![DocElement::new("summary").text(format!("{name} action")).into()],
            },
        }
    }

    pub fn returns(mut self, ty: TypeRef) -> Self {
        self.method.return_type = ty;
        self
    }

    pub fn param(mut self, name: &str, ty: TypeRef) -> Self {
        self.method.parameters.push(ParameterDecl {
            name: name.to_string(),
            ty,
            optional: false,
            attributes: Vec::new(),
        });
        self
    }

    /// A parameter declared with a default value.
    pub fn optional_param(mut self, name: &str, ty: TypeRef) -> Self {
        self.method.parameters.push(ParameterDecl {
            name: name.to_string(),
            ty,
            optional: true,
            attributes: Vec::new(),
        });
        self
    }

    pub fn body(mut self, name: &str, ty: TypeRef) -> Self {
        self.method.parameters.push(ParameterDecl {
            name: name.to_string(),
            ty,
            optional: false,
            attributes: vec![Attribute::new("FromBody")],
        });
        self
    }

    /// Replace the documentation nodes.
    pub fn documented(mut self, summary: DocElement) -> Self {
        self.method.documentation = vec![summary.into()];
        self
    }

    pub fn param_doc(mut self, name: &str, description: &str) -> Self {
        self.method
            .documentation
            .push(DocElement::new("param").attr("name", name).text(description).into());
        self
    }

    pub fn undocumented(mut self) -> Self {
        self.method.documentation.clear();
        self
    }

    pub fn build(self) -> MethodDecl {
        self.method
    }
}

/// A concrete controller deriving from `Controller`.
pub fn controller(name: &str, methods: Vec<MethodDecl>) -> ClassDecl {
    ClassDecl {
        name: name.to_string(),
        namespace: None,
        base_type: Some(TypeRef::named("Controller")),
        is_abstract: false,
        attributes: Vec::new(),
        methods,
    }
}

/// A document holding `classes` under the given folder segments.
pub fn document(folders: &[&str], classes: Vec<ClassDecl>) -> DocumentDecl {
    let mut path: Vec<&str> = folders.to_vec();
    let file = classes
        .first()
        .map(|c| format!("{}.cs", c.name))
        .unwrap_or_else(|| "Empty.cs".to_string());
    path.push(&file);
    DocumentDecl {
        path: path.join("/"),
        folders: folders.iter().map(|f| f.to_string()).collect(),
        classes,
    }
}

pub fn project(assembly_name: &str, documents: Vec<DocumentDecl>) -> ProjectDecl {
    ProjectDecl {
        assembly_name: assembly_name.to_string(),
        documents,
    }
}

/// A temporary output root with a matching [`GeneratorConfig`].
pub struct TempOutput {
    dir: TempDir,
    pub config: GeneratorConfig,
}

impl TempOutput {
    pub fn new(project_prefix: &str) -> std::io::Result<Self> {
        let dir = TempDir::new()?;
        let config = GeneratorConfig::new(dir.path(), project_prefix);
        Ok(Self { dir, config })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Read a generated module by its path relative to the services root.
    pub fn read(&self, relative: &str) -> std::io::Result<String> {
        std::fs::read_to_string(self.config.services_root().join(relative))
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.config.services_root().join(relative).exists()
    }
}
