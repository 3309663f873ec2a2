//! Node positions.

use std::fmt;

/// Position of a node as child indices from the root.
///
/// Paths order lexicographically, which is exactly document (pre-order)
/// order: an ancestor sorts before its descendants, and earlier siblings
/// sort before later ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// Path of the root node.
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Create a path from child indices.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// The child indices.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of steps from the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Path of the parent, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodePath> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// Index of this node within its parent, `None` for the root.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Path of the `index`-th child of this node.
    #[must_use]
    pub fn child(&self, index: usize) -> NodePath {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Whether `self` is `other` or one of its ancestors.
    #[must_use]
    pub fn contains(&self, other: &NodePath) -> bool {
        other.0.starts_with(&self.0)
    }

    /// The ancestor of `self` that is a direct child of `ancestor`.
    ///
    /// Returns `None` when `ancestor` does not strictly contain `self`.
    #[must_use]
    pub fn child_under(&self, ancestor: &NodePath) -> Option<NodePath> {
        if !ancestor.contains(self) || ancestor.depth() == self.depth() {
            return None;
        }
        Some(Self(self.0[..=ancestor.depth()].to_vec()))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}
