//! TypeScript service module renderer.

use clientgen_codegen::{
    CodeFragment, ServiceRenderer,
    extract::{RouteSegment, segments},
    generation::ImportCollector,
};
use clientgen_core::collapse_whitespace;
use clientgen_ir::{ServiceDeclaration, ServiceModule};

use crate::{
    CodeFile, RawCode, TypeScriptTypeMapper,
    ast::{Fn, Import, JsObject, Param, string_literal},
    naming::safe_name,
};

/// First line of every generated module.
pub const GENERATED_HEADER: &str = "// This file is generated by clientgen. Do not edit.";

/// Module (relative to the app root) exporting the `request` helper.
const HTTP_MODULE: &str = "http";

/// Module (relative to the app root) declaring request and response types.
const MODELS_MODULE: &str = "models";

const REQUEST_FN: &str = "request";

/// Renders service modules as TypeScript.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeScriptRenderer;

impl TypeScriptRenderer {
    pub fn new() -> Self {
        Self
    }

    fn service_fn(
        &self,
        service: &ServiceDeclaration,
        mapper: &TypeScriptTypeMapper,
        imports: &mut ImportCollector,
    ) -> Fn {
        let return_type = mapper.map(&service.return_type, imports);
        let mut func = Fn::new(&service.name).returns(format!("Promise<{}>", return_type));

        for line in doc_lines(service) {
            func = func.doc(line);
        }

        for (i, param) in service.parameters.iter().enumerate() {
            let ty = mapper.map(&param.ty, imports);
            let name = safe_name(&param.name);
            // `?` is only legal when every later parameter may be omitted too.
            let trailing = service.parameters[i..].iter().all(|p| p.optional);
            func = func.param(match (param.optional, trailing) {
                (true, true) => Param::new(name, ty).optional(),
                (true, false) => Param::new(name, format!("{} | undefined", ty)),
                (false, _) => Param::new(name, ty),
            });
        }

        let query = service
            .query_parameters
            .iter()
            .fold(JsObject::new(), |obj, p| obj.raw(&p.name, safe_name(&p.name)));
        let options = JsObject::new()
            .string("method", service.verb.as_str())
            .raw("url", url_expression(service))
            .object_if(!query.is_empty(), "query", query)
            .raw_opt("body", service.body_parameter.as_ref().map(|p| safe_name(&p.name)));

        func.body_fragment(CodeFragment::block(
            format!("return {}<{}>({{", REQUEST_FN, return_type),
            options.property_fragments(),
            Some("});".to_string()),
        ))
    }
}

impl ServiceRenderer for TypeScriptRenderer {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self, module: &ServiceModule) -> String {
        let prefix = module.root_prefix();
        let file = CodeFile::new().header(GENERATED_HEADER);
        if module.is_empty() {
            return file.add(RawCode::new("export {};")).render();
        }

        let models = format!("{}{}", prefix, MODELS_MODULE);
        let mapper = TypeScriptTypeMapper::new(&models);
        let mut imports = ImportCollector::new();
        let functions: Vec<Fn> = module
            .services
            .iter()
            .map(|service| self.service_fn(service, &mapper, &mut imports))
            .collect();

        let type_imports = imports
            .iter()
            .filter(|(_, symbols)| !symbols.is_empty())
            .map(|(from, symbols)| Import::new(from).named_all(symbols.iter().cloned()).type_only());

        file.import(Import::new(format!("{}{}", prefix, HTTP_MODULE)).named(REQUEST_FN))
            .imports(type_imports)
            .add_all(functions)
            .render()
    }
}

/// JSDoc lines: the summary, then `@param` for each documented parameter in
/// declaration order.
fn doc_lines(service: &ServiceDeclaration) -> Vec<String> {
    let mut lines = Vec::new();
    let summary = collapse_whitespace(&service.documentation.summary);
    if !summary.is_empty() {
        lines.push(escape_comment(&summary));
    }
    for param in &service.parameters {
        if let Some(description) = service.documentation.param(&param.name) {
            let description = collapse_whitespace(description);
            let name = safe_name(&param.name);
            lines.push(if description.is_empty() {
                format!("@param {}", name)
            } else {
                format!("@param {} {}", name, escape_comment(&description))
            });
        }
    }
    lines
}

fn escape_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}

/// The `url` value: a template literal interpolating URI parameters, or a
/// plain string literal when nothing is interpolated.
fn url_expression(service: &ServiceDeclaration) -> String {
    let parsed = segments(&service.route)
        .unwrap_or_else(|_| vec![RouteSegment::Literal(service.route.clone())]);

    let interpolates = parsed.iter().any(|segment| {
        matches!(segment, RouteSegment::Placeholder(name) if service.is_uri_parameter(name))
    });
    if !interpolates {
        let text: String = parsed
            .iter()
            .map(|segment| match segment {
                RouteSegment::Literal(text) => text.clone(),
                RouteSegment::Placeholder(name) => format!("{{{}}}", name),
            })
            .collect();
        return string_literal(&text);
    }

    let mut out = String::from("`");
    for segment in &parsed {
        match segment {
            RouteSegment::Literal(text) => out.push_str(&escape_template(text)),
            RouteSegment::Placeholder(name) if service.is_uri_parameter(name) => {
                out.push_str(&format!(
                    "${{encodeURIComponent(String({}))}}",
                    safe_name(name)
                ));
            }
            RouteSegment::Placeholder(name) => {
                out.push_str(&escape_template(&format!("{{{}}}", name)))
            }
        }
    }
    out.push('`');
    out
}

fn escape_template(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '`' | '$') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
