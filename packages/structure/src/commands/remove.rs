//! Remove a structure.

use std::collections::HashSet;

use super::{nested_kinds, renumber_after};
use crate::document::{Step, Transaction};
use crate::error::Result;
use crate::namespace::expand_prefixed;
use crate::state::EditorState;
use crate::structure::StructureRegistry;

/// Remove the structure carrying `resource` and renumber what remains.
///
/// Explicit properties pointing into the removed subtree are pruned in the
/// same transaction, so no triple outlives the node it refers to.
///
/// Returns `Ok(None)` when the resource is unknown or is not a registered
/// structure.
///
/// # Errors
/// Returns `StepFailed` if the removal cannot be applied to the document.
pub fn remove_structure(
    state: &EditorState,
    registry: &StructureRegistry,
    resource: &str,
) -> Result<Option<Transaction>> {
    let doc = state.doc();
    let Some(path) = doc.find_resource(resource) else {
        tracing::debug!(resource = %resource, "Resource not found, nothing to remove");
        return Ok(None);
    };
    let node = doc.expect_node(&path)?;
    let Some(spec) = registry.spec_for_kind(node.kind) else {
        tracing::debug!(resource = %resource, kind = %node.kind, "Not a structure");
        return Ok(None);
    };
    let (Some(parent), Some(index)) = (path.parent(), path.index()) else {
        return Ok(None);
    };

    let removed: HashSet<String> = node
        .subtree_resources()
        .into_iter()
        .map(expand_prefixed)
        .collect();

    let mut transaction = Transaction::new();

    // Prune before removing so that subject paths are still valid
    for (subject, owner) in doc.descendants() {
        if path.contains(&subject) {
            continue;
        }
        for property in &owner.properties {
            if removed.contains(&expand_prefixed(&property.object)) {
                transaction.push(Step::RemoveProperty {
                    subject: subject.clone(),
                    property: property.clone(),
                });
            }
        }
    }
    let pruned = transaction.len();

    transaction.push(Step::ReplaceChildren {
        parent: parent.clone(),
        from: index,
        to: index + 1,
        nodes: Vec::new(),
    });

    let nested = nested_kinds([node]);
    let remaining = doc.apply(&transaction)?;
    renumber_after(remaining, &path, spec, &nested, registry, &mut transaction)?;

    tracing::info!(
        structure = spec.name(),
        resource = %resource,
        pruned_triples = pruned,
        "Removed structure"
    );
    Ok(Some(transaction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{
        Document, Node, NodeKind, NodePath, Property, NUMBER_ATTR, PROPERTY_ATTR, RESOURCE_ATTR,
    };
    use crate::structure::create_default_structures;

    const BESLUIT: &str = "http://data.lblod.info/besluiten/1";

    fn uri(id: &str) -> String {
        format!("http://data.lblod.info/{id}")
    }

    fn section(id: &str, number: &str, articles: Vec<Node>) -> Node {
        Node::new(NodeKind::Section)
            .with_attr(RESOURCE_ATTR, uri(id))
            .with_child(Node::new(NodeKind::StructureHeader).with_attr(NUMBER_ATTR, number))
            .with_child(
                Node::new(NodeKind::SectionBody)
                    .with_attr(PROPERTY_ATTR, "say:body")
                    .with_children(articles),
            )
    }

    fn article(id: &str, number: &str) -> Node {
        Node::new(NodeKind::Article)
            .with_attr(RESOURCE_ATTR, uri(id))
            .with_child(Node::new(NodeKind::StructureHeader).with_attr(NUMBER_ATTR, number))
    }

    fn state() -> EditorState {
        let chapter = Node::new(NodeKind::Chapter)
            .with_attr(RESOURCE_ATTR, uri("c"))
            .with_property(Property::new("say:hasPart", uri("s1")))
            .with_property(Property::new("say:hasPart", uri("s2")))
            .with_child(Node::new(NodeKind::StructureHeader).with_attr(NUMBER_ATTR, "I"))
            .with_child(
                Node::new(NodeKind::ChapterBody)
                    .with_attr(PROPERTY_ATTR, "say:body")
                    .with_child(section("s1", "I", vec![article("a1", "1")]))
                    .with_child(section("s2", "II", vec![article("a2", "2")])),
            );
        let root = Node::new(NodeKind::Doc).with_child(
            Node::new(NodeKind::Besluit)
                .with_attr(RESOURCE_ATTR, BESLUIT)
                .with_property(Property::new("say:hasPart", uri("c")))
                .with_property(Property::new("say:hasPart", uri("a1")))
                .with_child(
                    Node::new(NodeKind::ArticleContainer)
                        .with_attr(PROPERTY_ATTR, "say:body")
                        .with_child(chapter),
                ),
        );
        EditorState::new(Document::new(root).unwrap())
    }

    fn remove(state: &EditorState, id: &str) -> Option<EditorState> {
        let registry = create_default_structures();
        let tx = remove_structure(state, &registry, &uri(id)).unwrap()?;
        Some(state.apply(&tx).unwrap())
    }

    #[test]
    fn test_remove_prunes_triples_into_subtree() {
        let state = state();
        let next = remove(&state, "s1").unwrap();

        assert!(next.doc().find_resource(&uri("s1")).is_none());
        assert!(next.doc().find_resource(&uri("a1")).is_none());
        assert!(next.graph().match_pattern(None, None, Some(&uri("s1"))).is_empty());
        assert!(next.graph().match_pattern(None, None, Some(&uri("a1"))).is_empty());
        // unrelated links survive
        assert!(next.graph().contains(BESLUIT, "say:hasPart", &uri("c")));
        assert!(next.graph().contains(&uri("c"), "say:hasPart", &uri("s2")));
    }

    #[test]
    fn test_remove_renumbers_scope() {
        let next = remove(&state(), "s1").unwrap();
        let s2 = next.doc().find_resource(&uri("s2")).unwrap();
        assert_eq!(next.doc().node_at(&s2).unwrap().displayed_number(), Some("I"));
        // articles are numbered across the decision
        let a2 = next.doc().find_resource(&uri("a2")).unwrap();
        assert_eq!(next.doc().node_at(&a2).unwrap().displayed_number(), Some("1"));
    }

    #[test]
    fn test_remove_article_renumbers_continuously() {
        let next = remove(&state(), "a1").unwrap();
        let a2 = next.doc().find_resource(&uri("a2")).unwrap();
        assert_eq!(next.doc().node_at(&a2).unwrap().displayed_number(), Some("1"));
        assert_eq!(
            next.doc().node_at(&NodePath::new(vec![0])).unwrap().properties,
            vec![Property::new("say:hasPart", uri("c"))]
        );
    }

    #[test]
    fn test_remove_unknown_or_non_structure() {
        let state = state();
        assert!(remove(&state, "zzz").is_none());
        let registry = create_default_structures();
        assert!(remove_structure(&state, &registry, BESLUIT).unwrap().is_none());
    }
}
