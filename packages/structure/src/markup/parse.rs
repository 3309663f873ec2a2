//! Markup parsing.

use roxmltree::Node as XmlNode;

use super::{get_tag_name, LINK_HREF_ATTR, LINK_TAG};
use crate::document::{Document, Node, NodeKind, Property, PROPERTY_ATTR};
use crate::error::{Result, StructureError};

/// Parse a document from its markup form.
///
/// A root element other than `<doc>` is wrapped in a document node.
///
/// # Errors
/// Returns `XmlParse` for malformed XML, `UnknownNodeKind` for elements that
/// do not map to a node kind, `MissingAttribute` for incomplete `<link>`
/// elements and `DuplicateResource` when resources are not unique.
///
/// # Examples
/// ```
/// use regelrecht_structure::markup::parse_document;
///
/// let doc = parse_document("<doc><paragraph>Hallo</paragraph></doc>").unwrap();
/// assert_eq!(doc.root().children[0].text_content(), "Hallo");
/// ```
pub fn parse_document(xml: &str) -> Result<Document> {
    let parsed = roxmltree::Document::parse(xml)?;
    let root = parse_element(parsed.root_element())?;

    let root = if root.kind == NodeKind::Doc {
        root
    } else {
        Node::new(NodeKind::Doc).with_child(root)
    };

    let document = Document::new(root)?;
    tracing::debug!(
        nodes = document.root().subtree_size(),
        "Parsed document markup"
    );
    Ok(document)
}

/// Convert one XML element (and its subtree) to a document node.
fn parse_element(element: XmlNode<'_, '_>) -> Result<Node> {
    let tag_name = get_tag_name(element);
    let kind = NodeKind::from_tag(tag_name).ok_or_else(|| StructureError::UnknownNodeKind {
        tag_name: tag_name.to_string(),
        context: element
            .parent_element()
            .map(|p| format!("<{}>", get_tag_name(p))),
    })?;

    if kind == NodeKind::Text {
        return Ok(Node::text(element.text().unwrap_or_default()));
    }

    let mut node = Node::new(kind);
    for attribute in element.attributes() {
        node.attrs
            .insert(attribute.name().to_string(), attribute.value().to_string());
    }

    for child in element.children() {
        if child.is_element() {
            if get_tag_name(child) == LINK_TAG {
                node.properties.push(parse_link(child)?);
            } else {
                node.children.push(parse_element(child)?);
            }
        } else if child.is_text() {
            // Whitespace between elements is layout, not content
            let text = child.text().unwrap_or_default();
            if !text.trim().is_empty() {
                node.children.push(Node::text(text));
            }
        }
    }

    Ok(node)
}

/// Parse a `<link property="..." href="..."/>` element.
fn parse_link(element: XmlNode<'_, '_>) -> Result<Property> {
    Ok(Property::new(
        required_attribute(element, PROPERTY_ATTR)?,
        required_attribute(element, LINK_HREF_ATTR)?,
    ))
}

fn required_attribute<'a>(element: XmlNode<'a, '_>, name: &str) -> Result<&'a str> {
    element
        .attribute(name)
        .ok_or_else(|| StructureError::MissingAttribute {
            element: get_tag_name(element).to_string(),
            attribute: name.to_string(),
        })
}
