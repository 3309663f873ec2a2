//! Numbering engine.
//!
//! Numbers are always recomputed from tree order; the number a structure
//! currently shows is only compared against, never trusted. Recomputing an
//! unchanged scope therefore yields an empty transaction.

use std::collections::{BTreeSet, HashMap};

use crate::document::{Document, Node, NodeKind, NodePath, Transaction};
use crate::structure::StructureSpec;

/// Node kinds that bound a continuous numbering scope.
const CONTINUOUS_SCOPE_KINDS: [NodeKind; 3] =
    [NodeKind::ArticleContainer, NodeKind::Besluit, NodeKind::Doc];

/// Renumber every structure of `spec`'s type inside the subtree at `scope`.
///
/// Continuous types share one counter for the whole scope. Other types
/// restart in every container. Structures of the same type are not
/// descended into. Only headers whose number differs are rewritten.
#[must_use]
pub fn renumber(doc: &Document, scope: &NodePath, spec: &StructureSpec) -> Transaction {
    let mut transaction = Transaction::new();
    let Some(root) = doc.node_at(scope) else {
        tracing::debug!(scope = %scope, "Numbering scope does not resolve");
        return transaction;
    };

    let mut counters: HashMap<NodePath, u32> = HashMap::new();
    visit(root, scope, scope, spec, &mut counters, &mut transaction);

    if !transaction.is_empty() {
        tracing::debug!(
            structure = spec.name(),
            scope = %scope,
            edits = transaction.len(),
            "Renumbered structures"
        );
    }
    transaction
}

fn visit(
    node: &Node,
    path: &NodePath,
    scope: &NodePath,
    spec: &StructureSpec,
    counters: &mut HashMap<NodePath, u32>,
    transaction: &mut Transaction,
) {
    for (index, child) in node.children.iter().enumerate() {
        let child_path = path.child(index);
        if child.kind != spec.node_kind() {
            visit(child, &child_path, scope, spec, counters, transaction);
            continue;
        }

        let key = if spec.continuous { scope } else { path };
        let counter = counters.entry(key.clone()).or_insert(0);
        *counter += 1;
        let ordinal = *counter;

        let expected = spec.number_format.format(ordinal);
        if child.displayed_number() == Some(expected.as_str()) {
            continue;
        }
        if spec.displayed_ordinal(child) == 0 {
            tracing::debug!(
                structure = spec.name(),
                path = %child_path,
                number = ?child.displayed_number(),
                "Missing or unreadable number, overwriting"
            );
        }
        transaction.push(spec.update_number(child, &child_path, ordinal));
    }
}

/// The scope to renumber after the structure at `path` changed.
///
/// Restarting types are scoped to their container. Continuous types are
/// scoped to the nearest article container, decision or the root.
#[must_use]
pub fn numbering_scope(doc: &Document, path: &NodePath, spec: &StructureSpec) -> NodePath {
    let Some(container) = path.parent() else {
        return NodePath::root();
    };
    if !spec.continuous {
        return container;
    }
    doc.ancestors(&container)
        .into_iter()
        .find(|p| {
            doc.node_at(p)
                .is_some_and(|n| CONTINUOUS_SCOPE_KINDS.contains(&n.kind))
        })
        .unwrap_or_else(NodePath::root)
}

/// Renumber every structure of `spec`'s type in the document.
///
/// Each distinct scope is renumbered once, outermost first.
#[must_use]
pub fn renumber_document(doc: &Document, spec: &StructureSpec) -> Transaction {
    let scopes: BTreeSet<NodePath> = doc
        .descendants()
        .into_iter()
        .filter(|(_, node)| node.kind == spec.node_kind())
        .map(|(path, _)| numbering_scope(doc, &path, spec))
        .collect();

    let mut transaction = Transaction::new();
    for scope in scopes {
        transaction.extend(renumber(doc, &scope, spec));
    }
    transaction
}
