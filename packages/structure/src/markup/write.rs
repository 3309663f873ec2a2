//! Markup serialization.

use super::{LINK_HREF_ATTR, LINK_TAG};
use crate::document::{Document, Node, NodeKind, PROPERTY_ATTR};

/// Indentation used by [`write_document_pretty`].
const INDENT: &str = "  ";

/// Serialize a document to compact markup.
///
/// The output parses back into an equal document.
#[must_use]
pub fn write_document(doc: &Document) -> String {
    let mut out = String::new();
    write_node(doc.root(), None, &mut out);
    out
}

/// Serialize a document with one element per line.
///
/// Elements holding character data are written on a single line so that no
/// whitespace is added to text content.
#[must_use]
pub fn write_document_pretty(doc: &Document) -> String {
    let mut out = String::new();
    write_node(doc.root(), Some(0), &mut out);
    out.push('\n');
    out
}

fn write_node(node: &Node, depth: Option<usize>, out: &mut String) {
    if node.kind == NodeKind::Text {
        out.push_str(&escape_text(node.text.as_deref().unwrap_or_default()));
        return;
    }

    let tag = node.kind.tag();
    out.push('<');
    out.push_str(tag);
    for (name, value) in &node.attrs {
        push_attribute(out, name, value);
    }

    if node.children.is_empty() && node.properties.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');

    // Mixed content stays inline
    let child_depth = depth.filter(|_| !has_text_child(node)).map(|d| d + 1);

    for property in &node.properties {
        newline(out, child_depth);
        out.push('<');
        out.push_str(LINK_TAG);
        push_attribute(out, PROPERTY_ATTR, &property.predicate);
        push_attribute(out, LINK_HREF_ATTR, &property.object);
        out.push_str("/>");
    }

    for (index, child) in node.children.iter().enumerate() {
        newline(out, child_depth);
        if child.kind == NodeKind::Text && needs_text_element(&node.children, index) {
            write_text_element(child, out);
        } else {
            write_node(child, child_depth, out);
        }
    }

    newline(out, child_depth.and(depth));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Character data that would not survive parsing on its own: blank runs
/// are dropped and adjacent runs merge.
fn needs_text_element(siblings: &[Node], index: usize) -> bool {
    let is_text = |i: usize| siblings.get(i).is_some_and(|n| n.kind == NodeKind::Text);
    let blank = siblings
        .get(index)
        .and_then(|n| n.text.as_deref())
        .is_none_or(|t| t.trim().is_empty());
    blank || (index > 0 && is_text(index - 1)) || is_text(index + 1)
}

fn write_text_element(node: &Node, out: &mut String) {
    let tag = NodeKind::Text.tag();
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(&escape_text(node.text.as_deref().unwrap_or_default()));
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn has_text_child(node: &Node) -> bool {
    node.children.iter().any(|c| c.kind == NodeKind::Text)
}

fn newline(out: &mut String, depth: Option<usize>) {
    if let Some(depth) = depth {
        out.push('\n');
        out.push_str(&INDENT.repeat(depth));
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attribute(value));
    out.push('"');
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\r', "&#13;")
}

/// Attribute values also keep their line breaks and tabs, which XML
/// attribute normalization would turn into spaces.
fn escape_attribute(value: &str) -> String {
    escape_text(value)
        .replace('"', "&quot;")
        .replace('\n', "&#10;")
        .replace('\t', "&#9;")
}
