//! Service declarations.
//!
//! A [`ServiceDeclaration`] is the normalized description of one callable
//! endpoint, independent of source and target language.

use clientgen_core::{HttpVerb, TypeRef};
use serde::Serialize;

/// A method parameter after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name as declared.
    pub name: String,
    /// Resolved parameter type.
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Whether the caller may omit the value.
    pub optional: bool,
    /// Whether the value is bound from the request payload.
    pub body: bool,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            body: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn body(mut self) -> Self {
        self.body = true;
        self
    }
}

/// Description of one documented parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    pub name: String,
    pub description: String,
}

/// Human-readable documentation recovered from a method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Documentation {
    /// Whitespace-normalized summary text.
    pub summary: String,
    /// Parameter descriptions in order of appearance.
    pub parameters: Vec<ParamDoc>,
}

impl Documentation {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.parameters.push(ParamDoc {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// Look up a parameter description by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.description.as_str())
    }
}

/// One callable endpoint.
///
/// Construct through the extraction mapper, which guarantees that
/// `uri_parameters`, `query_parameters` and `body_parameter` are disjoint and
/// that every URI parameter names a placeholder in `route`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDeclaration {
    pub verb: HttpVerb,
    /// Raw route template, e.g. `orders/{id}`.
    pub route: String,
    /// Method identifier, used verbatim as the generated function name.
    pub name: String,
    /// Payload type after async unwrapping.
    pub return_type: TypeRef,
    /// All parameters in declaration order.
    pub parameters: Vec<Parameter>,
    pub uri_parameters: Vec<Parameter>,
    pub query_parameters: Vec<Parameter>,
    pub body_parameter: Option<Parameter>,
    pub documentation: Documentation,
}

impl ServiceDeclaration {
    /// Returns true if a parameter with this name is bound from the route.
    pub fn is_uri_parameter(&self, name: &str) -> bool {
        self.uri_parameters.iter().any(|p| p.name == name)
    }
}
