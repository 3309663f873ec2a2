//! Editing commands.
//!
//! Commands read an [`EditorState`](crate::state::EditorState) and return a
//! single [`Transaction`] for the caller to apply, or `None` when there is
//! nothing to do. They never mutate the state they are given.

mod insert;
mod recalculate;
mod remove;
mod reorder;

use std::collections::BTreeSet;

use crate::document::{Document, Node, NodeKind, NodePath, Transaction};
use crate::error::Result;
use crate::numbering::{numbering_scope, renumber};
use crate::structure::{StructureRegistry, StructureSpec};

pub use insert::insert_structure;
pub use recalculate::recalculate_all;
pub use remove::remove_structure;
pub use reorder::{move_structure, Direction};

/// Kinds of structures nested below the given nodes.
fn nested_kinds<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> BTreeSet<NodeKind> {
    fn collect(node: &Node, out: &mut BTreeSet<NodeKind>) {
        for child in &node.children {
            if child.is_structural() {
                out.insert(child.kind);
            }
            collect(child, out);
        }
    }

    let mut out = BTreeSet::new();
    for node in nodes {
        collect(node, &mut out);
    }
    out
}

/// Append the renumbering that follows a change at `path`.
///
/// The changed structure's own scope is always renumbered. Continuous types
/// nested in the changed subtrees are renumbered too, since their order
/// across the scope may have changed. Each pass sees the document as left by
/// the previous one.
fn renumber_after(
    mut doc: Document,
    path: &NodePath,
    spec: &StructureSpec,
    nested: &BTreeSet<NodeKind>,
    registry: &StructureRegistry,
    transaction: &mut Transaction,
) -> Result<()> {
    let passes = registry.iter().filter(|s| {
        s.structure_type == spec.structure_type
            || (s.continuous && nested.contains(&s.node_kind()))
    });

    for pass_spec in passes {
        let scope = numbering_scope(&doc, path, pass_spec);
        let pass = renumber(&doc, &scope, pass_spec);
        if pass.is_empty() {
            continue;
        }
        doc = doc.apply(&pass)?;
        transaction.extend(pass);
    }
    Ok(())
}
