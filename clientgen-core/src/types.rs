//! Core type definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A resolved reference to a named type, as reported by the front end.
///
/// Generic arguments are kept structurally (`Task<List<Order>>` is a `Task`
/// with one argument, a `List` with one argument), so generators can unwrap or
/// map them without re-parsing type names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeRef {
    /// Simple name without namespace or generic arity (e.g., "Task").
    pub name: String,
    /// Containing namespace, when the front end resolved one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Generic type arguments in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_arguments: Vec<TypeRef>,
    /// Single-dimensional array of this type (`T[]`).
    #[serde(default, skip_serializing_if = "is_false")]
    pub array: bool,
    /// Nullable annotation (`T?`).
    #[serde(default, skip_serializing_if = "is_false")]
    pub nullable: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl TypeRef {
    /// A plain named type with no arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            type_arguments: Vec::new(),
            array: false,
            nullable: false,
        }
    }

    /// A generic type instantiation.
    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        Self {
            type_arguments: args.into_iter().collect(),
            ..Self::named(name)
        }
    }

    /// The `void` pseudo-type.
    pub fn void() -> Self {
        Self::named("void")
    }

    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn array(mut self) -> Self {
        self.array = true;
        self
    }

    /// Namespace-qualified name without generic arguments.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.type_arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.type_arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        if self.array {
            write!(f, "[]")?;
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

/// HTTP verb of a service endpoint.
///
/// The set is closed: only attributes that name one of these verbs count as
/// verb annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpVerb {
    /// Attribute name prefix shared by every verb annotation.
    pub const ATTRIBUTE_PREFIX: &'static str = "Http";

    /// Match an attribute name (`HttpGet`, `HttpGetAttribute`, ...) to a verb.
    pub fn from_attribute_name(name: &str) -> Option<Self> {
        let name = name.strip_suffix("Attribute").unwrap_or(name);
        let verb = name.strip_prefix(Self::ATTRIBUTE_PREFIX)?;
        match verb {
            "Get" => Some(Self::Get),
            "Post" => Some(Self::Post),
            "Put" => Some(Self::Put),
            "Delete" => Some(Self::Delete),
            "Patch" => Some(Self::Patch),
            "Head" => Some(Self::Head),
            "Options" => Some(Self::Options),
            _ => None,
        }
    }

    /// Upper-case wire name (e.g., "GET").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
