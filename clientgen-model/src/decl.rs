//! Declarations exposed by the front end.
//!
//! These mirror the subset of the C# syntax tree and semantic model the
//! generator reads: classes, methods, parameters, attributes and XML
//! documentation, with every type reference already resolved.

use clientgen_core::{HttpVerb, TypeRef};
use indexmap::IndexMap;
use serde::Deserialize;

/// A loaded project (assembly).
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectDecl {
    /// Assembly name, e.g. "Acme.Admin.Web".
    pub assembly_name: String,
    #[serde(default)]
    pub documents: Vec<DocumentDecl>,
}

/// One source document of a project.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentDecl {
    /// Path relative to the project root.
    pub path: String,
    /// Folder segments from the project root to the document.
    #[serde(default)]
    pub folders: Vec<String>,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
}

/// A class declaration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassDecl {
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    /// Resolved base type, if the class declares one.
    #[serde(default)]
    pub base_type: Option<TypeRef>,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    /// Whether a type reference points at this declaration.
    ///
    /// References without a namespace match on the simple name alone.
    pub fn matches(&self, ty: &TypeRef) -> bool {
        if self.name != ty.name {
            return false;
        }
        match (&ty.namespace, &self.namespace) {
            (Some(wanted), Some(actual)) => wanted == actual,
            (Some(_), None) => false,
            (None, _) => true,
        }
    }
}

/// Declared accessibility of a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Internal,
    Protected,
    ProtectedInternal,
    PrivateProtected,
    #[default]
    Private,
}

/// A method declaration with resolved types.
#[derive(Debug, Clone, Deserialize)]
pub struct MethodDecl {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub is_static: bool,
    pub return_type: TypeRef,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
    /// Top-level nodes of the XML documentation comment.
    #[serde(default)]
    pub documentation: Vec<DocNode>,
}

impl MethodDecl {
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.is(name))
    }

    /// Attributes that are HTTP verb annotations, paired with their verb.
    pub fn verb_annotations(&self) -> impl Iterator<Item = (HttpVerb, &Attribute)> {
        self.attributes
            .iter()
            .filter_map(|a| a.http_verb().map(|verb| (verb, a)))
    }
}

/// A method parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Declared with a default value.
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl ParameterDecl {
    /// Bound from the request payload (`[FromBody]`).
    pub fn is_body(&self) -> bool {
        self.attributes.iter().any(|a| a.is("FromBody"))
    }

    /// The caller may omit the value: declared optional or nullable.
    pub fn is_optional(&self) -> bool {
        self.optional || self.ty.nullable
    }
}

/// An attribute application with its positional constructor arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attribute {
    pub name: String,
    /// Constructor arguments, string literals unquoted.
    #[serde(default)]
    pub arguments: Vec<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.arguments.push(value.into());
        self
    }

    /// Compare names, accepting the optional `Attribute` suffix.
    pub fn is(&self, name: &str) -> bool {
        self.name.strip_suffix("Attribute").unwrap_or(&self.name) == name
    }

    pub fn first_argument(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }

    /// The verb this attribute annotates, if it is an HTTP verb annotation.
    pub fn http_verb(&self) -> Option<HttpVerb> {
        HttpVerb::from_attribute_name(&self.name)
    }
}

/// A node of structured XML documentation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DocNode {
    /// Character data.
    Text { text: String },
    /// A nested element such as `<summary>`, `<param name="id">` or `<see cref="..."/>`.
    Element(DocElement),
}

impl DocNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&DocElement> {
        match self {
            Self::Element(el) => Some(el),
            Self::Text { .. } => None,
        }
    }
}

/// A documentation element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocElement {
    pub tag: String,
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
    #[serde(default)]
    pub children: Vec<DocNode>,
}

impl DocElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, node: DocNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(DocNode::text(text))
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl From<DocElement> for DocNode {
    fn from(el: DocElement) -> Self {
        Self::Element(el)
    }
}
