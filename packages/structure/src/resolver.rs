//! Insertion resolver.
//!
//! Decides where a new structure goes for a given cursor:
//!
//! 1. the narrowest ancestor-or-self of the cursor whose kind is a valid
//!    container; if it holds only plain content, that content is wrapped
//!    into the new structure,
//! 2. otherwise the structure is inserted into that container right after
//!    the child holding the cursor,
//! 3. failing both, a structure with an insert predicate is appended to the
//!    first linked node that has a valid body.

use crate::document::{Document, NodePath};
use crate::graph::{GraphIndex, Triple, EXACT_PREFIX};
use crate::structure::StructureSpec;

/// How the resolved range is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    /// Insert the new structure at the range (which is empty).
    Insert,

    /// Replace the range; its nodes become the new structure's body.
    Wrap,
}

/// Where to put a new structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPoint {
    /// The container receiving the structure.
    pub container: NodePath,

    /// First child index of the range.
    pub from: usize,

    /// End (exclusive) of the range.
    pub to: usize,

    pub mode: InsertMode,
}

impl InsertionPoint {
    /// Path the new structure will have.
    #[must_use]
    pub fn target(&self) -> NodePath {
        self.container.child(self.from)
    }
}

/// Resolve the insertion point for `spec` at `cursor`.
///
/// Returns `None` when no valid container can be found, which callers treat
/// as a no-op.
#[must_use]
pub fn resolve_insertion_point(
    doc: &Document,
    graph: &GraphIndex,
    cursor: &NodePath,
    spec: &StructureSpec,
) -> Option<InsertionPoint> {
    let ancestors = doc.ancestors(cursor);
    if ancestors.is_empty() {
        tracing::debug!(cursor = %cursor, "Cursor does not resolve");
        return None;
    }

    let point = match nearest_container(doc, &ancestors, spec) {
        Some(container) => {
            wrap_range(doc, &container).or_else(|| insert_after(doc, container, cursor))
        }
        None => predicate_anchor(doc, graph, &ancestors, spec),
    };

    match &point {
        Some(p) => tracing::debug!(
            structure = spec.name(),
            container = %p.container,
            from = p.from,
            to = p.to,
            mode = ?p.mode,
            "Resolved insertion point"
        ),
        None => tracing::debug!(
            structure = spec.name(),
            cursor = %cursor,
            "No valid container for structure"
        ),
    }
    point
}

/// Narrowest ancestor-or-self that may hold the structure.
fn nearest_container(
    doc: &Document,
    ancestors: &[NodePath],
    spec: &StructureSpec,
) -> Option<NodePath> {
    let limit = match spec.limit_to {
        Some(kind) => Some(
            ancestors
                .iter()
                .find(|p| doc.node_at(p).is_some_and(|n| n.kind == kind))?,
        ),
        None => None,
    };

    ancestors
        .iter()
        .filter(|p| limit.is_none_or(|root| root.contains(p)))
        .find(|p| {
            doc.node_at(p)
                .is_some_and(|n| spec.allows_container(n.kind))
        })
        .cloned()
}

/// A container holding only plain content is wrapped whole.
fn wrap_range(doc: &Document, container: &NodePath) -> Option<InsertionPoint> {
    let node = doc.node_at(container)?;
    if node.children.is_empty() || node.children.iter().any(|c| c.is_structural()) {
        return None;
    }
    Some(InsertionPoint {
        container: container.clone(),
        from: 0,
        to: node.children.len(),
        mode: InsertMode::Wrap,
    })
}

/// Insert right after the container child holding the cursor, or at the end
/// when the cursor is the container itself.
fn insert_after(doc: &Document, container: NodePath, cursor: &NodePath) -> Option<InsertionPoint> {
    let index = match cursor.child_under(&container) {
        Some(child) => child.index()? + 1,
        None => doc.node_at(&container)?.children.len(),
    };
    Some(InsertionPoint {
        container,
        from: index,
        to: index,
        mode: InsertMode::Insert,
    })
}

/// Append to the body of the first node linked from the nearest resource
/// through the spec's insert predicate.
///
/// Linked nodes are tried in document order.
fn predicate_anchor(
    doc: &Document,
    graph: &GraphIndex,
    ancestors: &[NodePath],
    spec: &StructureSpec,
) -> Option<InsertionPoint> {
    let predicate = spec.insert_predicate.as_ref()?;
    let resource = ancestors
        .iter()
        .find_map(|p| doc.node_at(p).and_then(|n| n.resource()))?;

    let subject = format!("{EXACT_PREFIX}{resource}");
    let predicate = format!("{EXACT_PREFIX}{}", predicate.full());
    let mut linked: Vec<NodePath> = graph
        .match_pattern(Some(&subject), Some(&predicate), None)
        .into_iter()
        .filter(|t| t.object.is_named())
        .filter_map(|t: &Triple| doc.find_resource(t.object.value()))
        .collect();
    linked.sort();

    linked.into_iter().find_map(|path| {
        let node = doc.node_at(&path)?;
        let index = node
            .children
            .iter()
            .position(|c| spec.allows_container(c.kind))?;
        let end = node.children.get(index)?.children.len();
        Some(InsertionPoint {
            container: path.child(index),
            from: end,
            to: end,
            mode: InsertMode::Insert,
        })
    })
}
