//! TypeScript/JavaScript object literal builder.

use clientgen_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A nested object, rendered on one line.
    Inline(JsObject),
}

impl Property {
    fn render(&self) -> String {
        match &self.value {
            PropertyValue::String(s) => format!("{}: {}", self.key, string_literal(s)),
            PropertyValue::Raw(s) if *s == self.key => self.key.clone(),
            PropertyValue::Raw(s) => format!("{}: {}", self.key, s),
            PropertyValue::Inline(obj) => format!("{}: {}", self.key, obj.inline()),
        }
    }
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::String(value.into()),
        });
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    ///
    /// When the expression equals the key, the property renders in shorthand
    /// form.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        });
        self
    }

    /// Add a nested object property, rendered inline.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value: PropertyValue::Inline(value),
        });
        self
    }

    /// Conditionally add a nested object property.
    pub fn object_if(self, condition: bool, key: impl Into<String>, value: JsObject) -> Self {
        if condition {
            self.object(key, value)
        } else {
            self
        }
    }

    /// Conditionally add a raw property using an Option.
    pub fn raw_opt(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.raw(key, v),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Single-line rendering, e.g. `{ status, page: _page }`.
    pub fn inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let props: Vec<String> = self.properties.iter().map(Property::render).collect();
        format!("{{ {} }}", props.join(", "))
    }

    /// One `key: value,` line per property, for embedding in a block.
    pub fn property_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| CodeFragment::Line(format!("{},", prop.render())))
            .collect()
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::line("{}")];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.property_fragments(),
            close: Some("}".to_string()),
        }]
    }
}

/// Quote a string as a double-quoted JavaScript literal.
pub(crate) fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object() {
        assert_eq!(JsObject::new().build(), "{}\n");
        assert_eq!(JsObject::new().inline(), "{}");
    }

    #[test]
    fn test_block_rendering() {
        let obj = JsObject::new()
            .string("method", "GET")
            .raw("body", "order")
            .build();
        assert_eq!(obj, "{\n  method: \"GET\",\n  body: order,\n}\n");
    }

    #[test]
    fn test_shorthand_and_renamed() {
        let obj = JsObject::new().raw("status", "status").raw("default", "_default");
        assert_eq!(obj.inline(), "{ status, default: _default }");
    }

    #[test]
    fn test_nested_inline_object() {
        let query = JsObject::new().raw("page", "page");
        let obj = JsObject::new()
            .object_if(!query.is_empty(), "query", query)
            .object_if(false, "skipped", JsObject::new());
        assert_eq!(obj.inline(), "{ query: { page } }");
    }

    #[test]
    fn test_string_literal_escapes() {
        assert_eq!(string_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(string_literal("orders"), "\"orders\"");
    }
}
