//! Parameter classification into path, query and body bindings.

use clientgen_ir::Parameter;

use crate::ExtractError;

/// A method's parameters split by binding source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub uri: Vec<Parameter>,
    pub query: Vec<Parameter>,
    pub body: Option<Parameter>,
}

/// Partition parameters against the route's placeholder names.
///
/// Body-bound parameters never take part in path/query binding. Every other
/// parameter is a URI parameter when a placeholder carries its name, and a
/// query parameter otherwise. Declaration order is kept within each group.
pub fn classify(parameters: &[Parameter], placeholders: &[String]) -> Result<Classified, ExtractError> {
    let bodies: Vec<&Parameter> = parameters.iter().filter(|p| p.body).collect();
    if bodies.len() > 1 {
        return Err(ExtractError::AmbiguousBodyParameter {
            parameters: bodies
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        });
    }

    let (uri, query): (Vec<_>, Vec<_>) = parameters
        .iter()
        .filter(|p| !p.body)
        .cloned()
        .partition(|p| placeholders.iter().any(|name| *name == p.name));

    Ok(Classified {
        uri,
        query,
        body: bodies.first().map(|p| (*p).clone()),
    })
}

#[cfg(test)]
mod tests {
    use clientgen_ir::TypeRef;

    use super::*;

    fn param(name: &str) -> Parameter {
        Parameter::new(name, TypeRef::named("string"))
    }

    fn names(params: &[Parameter]) -> Vec<&str> {
        params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_uri_and_query_split() {
        let params = [param("id"), param("status")];
        let classified = classify(&params, &["id".to_string()]).unwrap();

        assert_eq!(names(&classified.uri), ["id"]);
        assert_eq!(names(&classified.query), ["status"]);
        assert_eq!(classified.body, None);
    }

    #[test]
    fn test_body_excluded_from_uri_and_query() {
        // A body parameter whose name also matches a placeholder stays body-bound.
        let params = [param("id"), param("order").body(), param("notify")];
        let placeholders = ["id".to_string(), "order".to_string()];
        let classified = classify(&params, &placeholders).unwrap();

        assert_eq!(names(&classified.uri), ["id"]);
        assert_eq!(names(&classified.query), ["notify"]);
        assert_eq!(classified.body.map(|p| p.name), Some("order".to_string()));
    }

    #[test]
    fn test_partitions_cover_all_parameters_without_overlap() {
        let params = [
            param("tenant"),
            param("page"),
            param("id"),
            param("payload").body(),
            param("sort"),
        ];
        let placeholders = ["tenant".to_string(), "id".to_string()];
        let classified = classify(&params, &placeholders).unwrap();

        let mut all: Vec<&str> = names(&classified.uri);
        all.extend(names(&classified.query));
        all.extend(classified.body.as_ref().map(|p| p.name.as_str()));
        all.sort_unstable();

        let mut expected = names(&params);
        expected.sort_unstable();
        assert_eq!(all, expected);

        assert!(
            classified
                .uri
                .iter()
                .all(|p| placeholders.contains(&p.name))
        );
    }

    #[test]
    fn test_unmatched_placeholder_is_ignored() {
        let classified = classify(&[param("q")], &["id".to_string()]).unwrap();
        assert!(classified.uri.is_empty());
        assert_eq!(names(&classified.query), ["q"]);
    }

    #[test]
    fn test_ambiguous_body_parameter() {
        let params = [param("a").body(), param("b").body()];
        match classify(&params, &[]) {
            Err(ExtractError::AmbiguousBodyParameter { parameters }) => {
                assert_eq!(parameters, "a, b");
            }
            other => panic!("expected AmbiguousBodyParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_no_parameters() {
        assert_eq!(classify(&[], &[]).unwrap(), Classified::default());
    }
}
