//! Recording containment relationships.

use super::index::GraphIndex;
use crate::document::{Document, NodePath, Property, Step, PROPERTY_ATTR};
use crate::namespace::{Resource, SAY};

/// The semantic parent of a container: the resource-bearing node whose
/// body the container is.
///
/// A container qualifies when its `property` attribute names `say:body` and
/// its parent carries a `resource`.
#[must_use]
pub fn semantic_parent(doc: &Document, container: &NodePath) -> Option<NodePath> {
    let node = doc.node_at(container)?;
    let body = SAY.term("body");
    if !node.attr(PROPERTY_ATTR).is_some_and(|p| body.matches_any(p)) {
        return None;
    }
    let parent = container.parent()?;
    doc.node_at(&parent)?.resource()?;
    Some(parent)
}

/// Step linking the semantic parent of `container` to `child_resource`.
///
/// Returns `None` when the container has no semantic parent or the triple
/// is already present. The step only touches the parent, so it can follow
/// an insertion into `container` in the same transaction.
#[must_use]
pub fn record_containment(
    doc: &Document,
    graph: &GraphIndex,
    container: &NodePath,
    child_resource: &str,
    predicate: &Resource,
) -> Option<Step> {
    let Some(subject) = semantic_parent(doc, container) else {
        tracing::debug!(
            container = %container,
            "No semantic parent, skipping containment triple"
        );
        return None;
    };
    let subject_resource = doc.node_at(&subject)?.resource()?;

    if graph.contains(subject_resource, predicate.full(), child_resource) {
        return None;
    }

    tracing::debug!(
        subject = %subject_resource,
        predicate = %predicate,
        object = %child_resource,
        "Recording containment"
    );
    Some(Step::AddProperty {
        subject,
        property: Property::new(predicate.prefixed(), child_resource),
    })
}
