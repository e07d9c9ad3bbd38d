//! Lookup of values in SOAP response bodies.
//!
//! Responses have a small fixed shape, so instead of mapping them onto
//! structs we search the tree for the first element with the wanted local
//! name. Namespace prefixes are ignored.

use xmltree::Element;

use crate::error::{ApiError, Result};

/// Depth-first search for the first descendant named `name`
pub fn find_element<'a>(root: &'a Element, name: &str) -> Option<&'a Element> {
    for child in root.children.iter().filter_map(|node| node.as_element()) {
        if child.name == name {
            return Some(child);
        }
        if let Some(found) = find_element(child, name) {
            return Some(found);
        }
    }
    None
}

/// Parse `body` and return the text of the first element named `name`
///
/// Fails with [`ApiError::BadResponse`] if the body is not XML, if the element
/// is missing or if it has no text.
pub fn element_text(body: &str, name: &str) -> Result<String> {
    let root = Element::parse(body.as_bytes())
        .map_err(|e| ApiError::bad_response(format!("The TV has returned a bad XML value: {}", e)))?;

    let element = find_element(&root, name)
        .ok_or_else(|| ApiError::bad_response(format!("Missing {} element", name)))?;

    element
        .get_text()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::bad_response(format!("Empty {} element", name)))
}
