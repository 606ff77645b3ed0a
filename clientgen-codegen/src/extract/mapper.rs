//! Method-to-service mapping.

use clientgen_ir::{HttpVerb, Parameter, ServiceDeclaration, TypeRef};
use clientgen_model::{MethodDecl, ParameterDecl};

use super::{classify, extract_documentation, placeholders};
use crate::ExtractError;

/// Generic types whose single argument is the real payload type.
pub const ASYNC_WRAPPERS: &[&str] = &["Task", "ValueTask"];

/// Return type names containing this marker perform redirects.
pub const REDIRECT_MARKER: &str = "Redirect";

/// Unwrap `Task<T>` / `ValueTask<T>` to `T`; a bare `Task` is `void`.
pub fn effective_return_type(ty: &TypeRef) -> TypeRef {
    if !ASYNC_WRAPPERS.contains(&ty.name.as_str()) || ty.array {
        return ty.clone();
    }
    match ty.type_arguments.as_slice() {
        [] => TypeRef::void(),
        [inner] => inner.clone(),
        _ => ty.clone(),
    }
}

/// Map one externally callable method to a service declaration.
///
/// Returns `Ok(None)` for redirecting methods, which are not data endpoints.
pub fn map_method(method: &MethodDecl) -> Result<Option<ServiceDeclaration>, ExtractError> {
    let return_type = effective_return_type(&method.return_type);
    if return_type.name.contains(REDIRECT_MARKER) {
        return Ok(None);
    }

    let documentation = extract_documentation(&method.documentation)?;

    let (verb, annotation) = {
        let mut annotations = method.verb_annotations();
        let first = annotations.next().ok_or(ExtractError::MissingVerbAnnotation)?;
        let rest: Vec<HttpVerb> = annotations.map(|(verb, _)| verb).collect();
        if !rest.is_empty() {
            let verbs = std::iter::once(first.0)
                .chain(rest)
                .map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ExtractError::AmbiguousVerbAnnotation { verbs });
        }
        first
    };

    let route = annotation.first_argument().unwrap_or_default().to_string();
    let parameters: Vec<Parameter> = method.parameters.iter().map(to_parameter).collect();
    let classified = classify(&parameters, &placeholders(&route)?)?;

    Ok(Some(ServiceDeclaration {
        verb,
        route,
        name: method.name.clone(),
        return_type,
        parameters,
        uri_parameters: classified.uri,
        query_parameters: classified.query,
        body_parameter: classified.body,
        documentation,
    }))
}

fn to_parameter(decl: &ParameterDecl) -> Parameter {
    Parameter {
        name: decl.name.clone(),
        ty: decl.ty.clone(),
        optional: decl.is_optional(),
        body: decl.is_body(),
    }
}
