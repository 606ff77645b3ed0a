//! Controller method resolution, including one level of base-controller merge.

use clientgen_model::{ClassDecl, MethodDecl, SemanticModel, Visibility};
use tracing::debug;

use crate::ExtractError;

/// Framework base types; controllers deriving directly from these inherit no
/// service methods.
pub const ROOT_CONTROLLER_TYPES: &[&str] = &["Controller", "ControllerBase"];

/// Attribute that opts a public method out of routing.
const NON_ACTION: &str = "NonAction";

/// Whether a method can be invoked over HTTP.
pub fn is_externally_callable(method: &MethodDecl) -> bool {
    method.visibility == Visibility::Public && !method.is_static && !method.has_attribute(NON_ACTION)
}

/// Collect the externally callable methods of a controller.
///
/// When the controller derives from something other than a framework root,
/// the immediate base class's own methods are appended after the
/// controller's. Only one level is merged; a method declared on the controller
/// hides a base method of the same name.
pub fn resolve_methods<'a, M>(
    model: &'a M,
    controller: &'a ClassDecl,
) -> Result<Vec<&'a MethodDecl>, ExtractError>
where
    M: SemanticModel + ?Sized,
{
    let mut methods: Vec<&MethodDecl> = controller.methods.iter().collect();

    if let Some(base) = controller
        .base_type
        .as_ref()
        .filter(|base| !ROOT_CONTROLLER_TYPES.contains(&base.name.as_str()))
    {
        let base_decl = model
            .resolve_class(base)
            .ok_or_else(|| ExtractError::UnresolvableBaseController {
                base: base.qualified_name(),
            })?;
        debug!(
            controller = %controller.name,
            base = %base_decl.name,
            "merging base controller methods"
        );

        let inherited = base_decl
            .methods
            .iter()
            .filter(|m| !controller.methods.iter().any(|own| own.name == m.name));
        methods.extend(inherited);
    }

    Ok(methods
        .into_iter()
        .filter(|m| is_externally_callable(m))
        .collect())
}
