//! Mapping of resolved C# types to TypeScript type expressions.

use clientgen_codegen::generation::ImportCollector;
use clientgen_core::TypeRef;

const NUMBER_TYPES: &[&str] = &[
    "byte", "sbyte", "short", "ushort", "int", "uint", "long", "ulong", "float", "double",
    "decimal", "Byte", "SByte", "Int16", "UInt16", "Int32", "UInt32", "Int64", "UInt64", "Single",
    "Double", "Decimal",
];

const STRING_TYPES: &[&str] = &[
    "string",
    "String",
    "char",
    "Char",
    "Guid",
    "DateTime",
    "DateTimeOffset",
    "DateOnly",
    "TimeOnly",
    "TimeSpan",
    "Uri",
];

const BOOLEAN_TYPES: &[&str] = &["bool", "Boolean"];

const UNKNOWN_TYPES: &[&str] = &["object", "Object", "dynamic", "JsonElement"];

/// Result types with no payload.
const VOID_TYPES: &[&str] = &["void", "IActionResult", "ActionResult", "StatusCodeResult"];

/// Single-argument wrappers that carry their argument as the payload.
const TRANSPARENT_WRAPPERS: &[&str] = &["ActionResult"];

const COLLECTION_TYPES: &[&str] = &[
    "List",
    "IList",
    "IEnumerable",
    "ICollection",
    "IReadOnlyList",
    "IReadOnlyCollection",
    "HashSet",
    "ISet",
    "IReadOnlySet",
    "IAsyncEnumerable",
];

const DICTIONARY_TYPES: &[&str] = &["Dictionary", "IDictionary", "IReadOnlyDictionary"];

/// TypeScript type mapper.
///
/// Well-known framework types map to TypeScript built-ins; every other named
/// type is assumed to be declared in the models module and is recorded as a
/// type import.
#[derive(Debug, Clone)]
pub struct TypeScriptTypeMapper {
    models_module: String,
}

impl TypeScriptTypeMapper {
    pub fn new(models_module: impl Into<String>) -> Self {
        Self {
            models_module: models_module.into(),
        }
    }

    /// Map a type, recording any model types it references.
    pub fn map(&self, ty: &TypeRef, imports: &mut ImportCollector) -> String {
        let base = self.map_base(ty, imports);
        let base = if ty.array {
            format!("{}[]", parenthesize(&base))
        } else {
            base
        };
        if ty.nullable && base != "void" && !base.ends_with(" | null") {
            format!("{} | null", base)
        } else {
            base
        }
    }

    fn map_base(&self, ty: &TypeRef, imports: &mut ImportCollector) -> String {
        let name = ty.name.as_str();
        let args = ty.type_arguments.as_slice();

        match args {
            [] if VOID_TYPES.contains(&name) => "void".to_string(),
            [] if NUMBER_TYPES.contains(&name) => "number".to_string(),
            [] if STRING_TYPES.contains(&name) => "string".to_string(),
            [] if BOOLEAN_TYPES.contains(&name) => "boolean".to_string(),
            [] if UNKNOWN_TYPES.contains(&name) => "unknown".to_string(),
            [inner] if name == "Nullable" => {
                let inner = self.map(inner, imports);
                if inner.ends_with(" | null") {
                    inner
                } else {
                    format!("{} | null", inner)
                }
            }
            [inner] if TRANSPARENT_WRAPPERS.contains(&name) => self.map(inner, imports),
            [item] if COLLECTION_TYPES.contains(&name) => {
                format!("{}[]", parenthesize(&self.map(item, imports)))
            }
            [key, value] if DICTIONARY_TYPES.contains(&name) => format!(
                "Record<{}, {}>",
                self.map(key, imports),
                self.map(value, imports)
            ),
            _ => {
                imports.add(&self.models_module, name);
                if args.is_empty() {
                    name.to_string()
                } else {
                    let args: Vec<String> = args.iter().map(|a| self.map(a, imports)).collect();
                    format!("{}<{}>", name, args.join(", "))
                }
            }
        }
    }
}

/// Wrap union types so that a suffix such as `[]` applies to the whole union.
fn parenthesize(ty: &str) -> String {
    if ty.contains(" | ") {
        format!("({})", ty)
    } else {
        ty.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODELS: &str = "../models";

    fn map(ty: TypeRef) -> (String, Vec<String>) {
        let mut imports = ImportCollector::new();
        let mapped = TypeScriptTypeMapper::new(MODELS).map(&ty, &mut imports);
        let symbols = imports.symbols(MODELS).map(str::to_string).collect();
        (mapped, symbols)
    }

    fn mapped(ty: TypeRef) -> String {
        map(ty).0
    }

    #[test]
    fn test_primitives() {
        assert_eq!(mapped(TypeRef::named("int")), "number");
        assert_eq!(mapped(TypeRef::named("Decimal")), "number");
        assert_eq!(mapped(TypeRef::named("string")), "string");
        assert_eq!(mapped(TypeRef::named("Guid")), "string");
        assert_eq!(mapped(TypeRef::named("DateTimeOffset")), "string");
        assert_eq!(mapped(TypeRef::named("bool")), "boolean");
        assert_eq!(mapped(TypeRef::named("object")), "unknown");
    }

    #[test]
    fn test_void_results() {
        assert_eq!(mapped(TypeRef::void()), "void");
        assert_eq!(mapped(TypeRef::named("IActionResult")), "void");
        assert_eq!(mapped(TypeRef::named("ActionResult")), "void");
        assert_eq!(
            mapped(TypeRef::generic("ActionResult", [TypeRef::named("Order")])),
            "Order"
        );
    }

    #[test]
    fn test_nullable() {
        assert_eq!(mapped(TypeRef::named("string").nullable()), "string | null");
        assert_eq!(
            mapped(TypeRef::generic("Nullable", [TypeRef::named("int")])),
            "number | null"
        );
        assert_eq!(
            mapped(TypeRef::generic("Nullable", [TypeRef::named("int")]).nullable()),
            "number | null"
        );
    }

    #[test]
    fn test_collections() {
        assert_eq!(mapped(TypeRef::named("int").array()), "number[]");
        assert_eq!(
            mapped(TypeRef::generic("List", [TypeRef::named("string")])),
            "string[]"
        );
        assert_eq!(
            mapped(TypeRef::generic(
                "IEnumerable",
                [TypeRef::named("string").nullable()]
            )),
            "(string | null)[]"
        );
        assert_eq!(
            mapped(TypeRef::generic(
                "Dictionary",
                [TypeRef::named("string"), TypeRef::named("long")]
            )),
            "Record<string, number>"
        );
    }

    #[test]
    fn test_model_types_are_imported() {
        let (ty, imports) = map(TypeRef::generic(
            "PagedResult",
            [TypeRef::generic("List", [TypeRef::named("Order")])],
        ));
        assert_eq!(ty, "PagedResult<Order[]>");
        assert_eq!(imports, ["Order", "PagedResult"]);
    }

    #[test]
    fn test_builtins_are_not_imported() {
        let (_, imports) = map(TypeRef::generic(
            "Dictionary",
            [TypeRef::named("Guid"), TypeRef::named("bool")],
        ));
        assert!(imports.is_empty());
    }
}
