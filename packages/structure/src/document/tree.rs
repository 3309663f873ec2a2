//! The document: an owned tree of nodes addressed by [`NodePath`].

use std::collections::HashSet;

use super::kind::NodeKind;
use super::node::Node;
use super::path::NodePath;
use crate::error::{Result, StructureError};

/// A document tree.
///
/// Documents are values: edits produce a new `Document` through
/// [`Document::apply`] and never change the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Node,
}

impl Document {
    /// Create a document from its root node.
    ///
    /// # Errors
    /// Returns `DuplicateResource` when two nodes share a resource.
    pub fn new(root: Node) -> Result<Self> {
        let document = Self { root };
        document.check_unique_resources()?;
        Ok(document)
    }

    /// An empty document.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            root: Node::new(NodeKind::Doc),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub(crate) fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    /// Node at `path`.
    #[must_use]
    pub fn node_at(&self, path: &NodePath) -> Option<&Node> {
        path.indices()
            .iter()
            .try_fold(&self.root, |node, &i| node.children.get(i))
    }

    pub(crate) fn node_at_mut(&mut self, path: &NodePath) -> Option<&mut Node> {
        path.indices()
            .iter()
            .try_fold(&mut self.root, |node, &i| node.children.get_mut(i))
    }

    /// Node at `path`, or an `InvalidPath` error.
    ///
    /// # Errors
    /// Returns `InvalidPath` when the path does not resolve.
    pub fn expect_node(&self, path: &NodePath) -> Result<&Node> {
        self.node_at(path)
            .ok_or_else(|| StructureError::InvalidPath(path.to_string()))
    }

    /// All nodes in document order, root included.
    #[must_use]
    pub fn descendants(&self) -> Vec<(NodePath, &Node)> {
        self.descendants_of(&NodePath::root())
    }

    /// All nodes of the subtree at `path` in document order, its root included.
    #[must_use]
    pub fn descendants_of(&self, path: &NodePath) -> Vec<(NodePath, &Node)> {
        let mut out = Vec::new();
        if let Some(node) = self.node_at(path) {
            collect(node, path.clone(), &mut out);
        }
        out
    }

    /// Ancestor-or-self paths of `path`, narrowest first.
    ///
    /// Returns an empty list when `path` does not resolve.
    #[must_use]
    pub fn ancestors(&self, path: &NodePath) -> Vec<NodePath> {
        if self.node_at(path).is_none() {
            return Vec::new();
        }
        let mut out = vec![path.clone()];
        let mut current = path.clone();
        while let Some(parent) = current.parent() {
            out.push(parent.clone());
            current = parent;
        }
        out
    }

    /// Path of the node carrying `resource`.
    #[must_use]
    pub fn find_resource(&self, resource: &str) -> Option<NodePath> {
        self.descendants()
            .into_iter()
            .find(|(_, node)| node.resource() == Some(resource))
            .map(|(path, _)| path)
    }

    /// Span of the subtree at `path` as pre-order offsets `[start, end)`.
    #[must_use]
    pub fn span(&self, path: &NodePath) -> Option<(usize, usize)> {
        let node = self.node_at(path)?;
        let start = self
            .descendants()
            .iter()
            .position(|(p, _)| p == path)?;
        Some((start, start + node.subtree_size()))
    }

    pub(crate) fn check_unique_resources(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for resource in self.root.subtree_resources() {
            if !seen.insert(resource) {
                return Err(StructureError::DuplicateResource(resource.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

fn collect<'a>(node: &'a Node, path: NodePath, out: &mut Vec<(NodePath, &'a Node)>) {
    out.push((path.clone(), node));
    for (i, child) in node.children.iter().enumerate() {
        collect(child, path.child(i), out);
    }
}
