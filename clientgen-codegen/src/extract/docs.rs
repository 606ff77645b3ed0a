//! XML documentation extraction.

use clientgen_core::collapse_whitespace;
use clientgen_ir::Documentation;
use clientgen_model::{DocElement, DocNode};

use crate::ExtractError;

/// Elements that separate text blocks; their content is padded with spaces.
const BLOCK_TAGS: &[&str] = &["para", "br", "list", "item"];

/// Attributes that name the target of an empty reference element, in lookup order.
const REFERENCE_ATTRIBUTES: &[&str] = &["cref", "name", "langword", "href"];

/// Recover the summary and parameter descriptions of a method.
///
/// The summary is the first `<summary>` element, markup stripped and
/// whitespace collapsed. Every `<param name="...">` contributes one pair in
/// order of appearance, its text kept as written.
pub fn extract_documentation(nodes: &[DocNode]) -> Result<Documentation, ExtractError> {
    let summary = elements(nodes)
        .find(|el| el.tag == "summary")
        .ok_or(ExtractError::MissingDocumentation)?;

    let mut docs = Documentation::new(collapse_whitespace(&inner_text(summary)));
    for param in elements(nodes).filter(|el| el.tag == "param") {
        if let Some(name) = param.attribute("name") {
            docs = docs.with_param(name, inner_text(param));
        }
    }

    Ok(docs)
}

/// Depth-first, pre-order walk over every element.
fn elements(nodes: &[DocNode]) -> impl Iterator<Item = &DocElement> {
    let mut stack: Vec<&DocElement> = nodes.iter().rev().filter_map(DocNode::as_element).collect();
    std::iter::from_fn(move || {
        let el = stack.pop()?;
        stack.extend(el.children.iter().rev().filter_map(DocNode::as_element));
        Some(el)
    })
}

/// Text content of an element with markup stripped.
fn inner_text(el: &DocElement) -> String {
    let mut out = String::new();
    push_text(&el.children, &mut out);
    out
}

fn push_text(nodes: &[DocNode], out: &mut String) {
    for node in nodes {
        match node {
            DocNode::Text { text } => out.push_str(text),
            DocNode::Element(el) if el.children.is_empty() => {
                if let Some(reference) = reference_name(el) {
                    out.push_str(reference);
                } else if BLOCK_TAGS.contains(&el.tag.as_str()) {
                    out.push(' ');
                }
            }
            DocNode::Element(el) if BLOCK_TAGS.contains(&el.tag.as_str()) => {
                out.push(' ');
                push_text(&el.children, out);
                out.push(' ');
            }
            DocNode::Element(el) => push_text(&el.children, out),
        }
    }
}

/// Short name of the symbol an empty `<see>`/`<paramref>` element points at.
///
/// `T:Acme.Orders.Order` becomes `Order`; `M:Acme.Orders.Place(System.Int32)`
/// becomes `Place`.
fn reference_name(el: &DocElement) -> Option<&str> {
    let target = REFERENCE_ATTRIBUTES.iter().find_map(|key| el.attribute(key))?;
    if el.attribute("href").is_some_and(|href| href == target) {
        return Some(target);
    }
    let target = match target.split_once(':') {
        Some((kind, rest)) if kind.len() == 1 => rest,
        _ => target,
    };
    let target = target.split(['(', '{', '`']).next().unwrap_or(target);
    target.rsplit('.').next()
}
