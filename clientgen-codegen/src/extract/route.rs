//! Route template placeholder matching.

use crate::ExtractError;

/// A piece of a parsed route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteSegment {
    /// Literal text, with `{{` / `}}` already unescaped.
    Literal(String),
    /// A `{name}` placeholder, by name.
    Placeholder(String),
}

/// Split a route template into literal text and placeholders.
///
/// Adjacent literal characters are merged into one segment.
pub fn segments(route: &str) -> Result<Vec<RouteSegment>, ExtractError> {
    let bytes = route.as_bytes();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'}' if bytes.get(i + 1) == Some(&bytes[i]) => {
                literal.push_str(&route[start..=i]);
                i += 2;
                start = i;
            }
            b'{' => {
                literal.push_str(&route[start..i]);
                if !literal.is_empty() {
                    segments.push(RouteSegment::Literal(std::mem::take(&mut literal)));
                }
                let close = find_close(route, i)?;
                segments.push(RouteSegment::Placeholder(placeholder_name(route, i, close)?));
                i = close + 1;
                start = i;
            }
            b'}' => return Err(ExtractError::malformed_route(route, i, "unmatched '}'")),
            _ => i += 1,
        }
    }

    literal.push_str(&route[start..]);
    if !literal.is_empty() {
        segments.push(RouteSegment::Literal(literal));
    }
    Ok(segments)
}

/// Extract placeholder names from a route template, left to right.
///
/// `users/{id}/orders/{orderId:int}` yields `["id", "orderId"]`. Inline
/// constraints and defaults (`:int`, `=1`), the optional marker (`?`) and
/// catch-all stars (`*`, `**`) are not part of the name. `{{` and `}}` are
/// escaped literal braces. Duplicates are returned as often as they appear.
pub fn placeholders(route: &str) -> Result<Vec<String>, ExtractError> {
    Ok(segments(route)?
        .into_iter()
        .filter_map(|segment| match segment {
            RouteSegment::Placeholder(name) => Some(name),
            RouteSegment::Literal(_) => None,
        })
        .collect())
}

/// Find the brace closing the placeholder opened at `open`.
///
/// Doubled braces inside a constraint (`{code:regex(^[[A-Z]]{{3}}$)}`) are
/// escapes and do not open or close anything.
fn find_close(route: &str, open: usize) -> Result<usize, ExtractError> {
    let bytes = route.as_bytes();
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'{' | b'}' if bytes.get(i + 1) == Some(&bytes[i]) => i += 2,
            b'}' => return Ok(i),
            b'{' => return Err(ExtractError::malformed_route(route, i, "nested '{'")),
            _ => i += 1,
        }
    }
    Err(ExtractError::malformed_route(route, open, "unclosed '{'"))
}

fn placeholder_name(route: &str, open: usize, close: usize) -> Result<String, ExtractError> {
    let inner = &route[open + 1..close];
    let inner = inner.trim_start_matches('*');
    let name = inner
        .split([':', '='])
        .next()
        .unwrap_or_default()
        .trim_end_matches('?')
        .trim();

    if name.is_empty() {
        return Err(ExtractError::malformed_route(route, open, "empty parameter name"));
    }
    Ok(name.to_string())
}
