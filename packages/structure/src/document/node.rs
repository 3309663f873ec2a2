//! Document tree nodes.

use std::collections::BTreeMap;

use super::kind::NodeKind;

/// Attribute carrying a node's semantic identity.
pub const RESOURCE_ATTR: &str = "resource";

/// Attribute carrying a node's RDF type.
pub const TYPEOF_ATTR: &str = "typeof";

/// Attribute carrying the predicate linking a node to its parent subject.
pub const PROPERTY_ATTR: &str = "property";

/// Attribute carrying a structure's displayed number (on its header).
pub const NUMBER_ATTR: &str = "number";

/// An explicit outgoing triple recorded on a semantic node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    /// Predicate, full or prefixed.
    pub predicate: String,

    /// Object resource URI.
    pub object: String,
}

impl Property {
    #[must_use]
    pub fn new(predicate: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Kind tag.
    pub kind: NodeKind,

    /// Attributes, ordered by name for stable serialization.
    pub attrs: BTreeMap<String, String>,

    /// Explicit relationship triples with this node's resource as subject.
    pub properties: Vec<Property>,

    /// Ordered children.
    pub children: Vec<Node>,

    /// Character data, only set on text nodes.
    pub text: Option<String>,
}

impl Node {
    /// Create an empty node of the given kind.
    #[must_use]
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attrs: BTreeMap::new(),
            properties: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::new(NodeKind::Text)
        }
    }

    /// Create a paragraph holding a single text node.
    #[must_use]
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self::new(NodeKind::Paragraph).with_child(Self::text(content))
    }

    /// Create a placeholder with the given prompt.
    #[must_use]
    pub fn placeholder(prompt: impl Into<String>) -> Self {
        Self::new(NodeKind::Placeholder).with_attr("placeholder_text", prompt)
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append an explicit property.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// The node's resource URI, if any.
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.attr(RESOURCE_ATTR)
    }

    #[must_use]
    pub fn is_structural(&self) -> bool {
        self.kind.is_structural()
    }

    /// First child of the given kind.
    #[must_use]
    pub fn child_of_kind(&self, kind: NodeKind) -> Option<&Node> {
        self.children.iter().find(|c| c.kind == kind)
    }

    /// Index of the first child of the given kind.
    #[must_use]
    pub fn child_index_of_kind(&self, kind: NodeKind) -> Option<usize> {
        self.children.iter().position(|c| c.kind == kind)
    }

    /// The number displayed in this structure's header.
    #[must_use]
    pub fn displayed_number(&self) -> Option<&str> {
        self.child_of_kind(NodeKind::StructureHeader)?
            .attr(NUMBER_ATTR)
    }

    /// Concatenated text of this subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Every resource in this subtree, in document order.
    #[must_use]
    pub fn subtree_resources(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_resources(&mut out);
        out
    }

    fn collect_resources<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(resource) = self.resource() {
            out.push(resource);
        }
        for child in &self.children {
            child.collect_resources(out);
        }
    }

    /// Number of nodes in this subtree, self included.
    #[must_use]
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_size).sum::<usize>()
    }
}
