//! Insert a new structure at the cursor.

use super::{nested_kinds, renumber_after};
use crate::document::{Node, NodePath, Step, Transaction};
use crate::error::Result;
use crate::graph::record_containment;
use crate::i18n::Translate;
use crate::resolver::{resolve_insertion_point, InsertMode};
use crate::state::EditorState;
use crate::structure::StructureRegistry;

/// Build the transaction inserting a `name` structure at `cursor`.
///
/// The transaction places the new structure, records its containment triple
/// when the container has a semantic parent, and renumbers the affected
/// scope. It reports the minted resource through
/// [`Transaction::created_resource`].
///
/// `content` becomes the body of the new structure. When the cursor sits in
/// a container holding only plain content, that content is wrapped instead.
///
/// Returns `Ok(None)` when there is no valid place for the structure.
///
/// # Errors
/// Returns `UnknownStructure` for unregistered names.
pub fn insert_structure(
    state: &EditorState,
    registry: &StructureRegistry,
    cursor: &NodePath,
    name: &str,
    content: Option<Vec<Node>>,
    translator: &dyn Translate,
) -> Result<Option<Transaction>> {
    let spec = registry.lookup(name)?;
    let doc = state.doc();

    let Some(point) = resolve_insertion_point(doc, state.graph(), cursor, spec) else {
        return Ok(None);
    };

    let content = match point.mode {
        InsertMode::Insert => content,
        InsertMode::Wrap => {
            let container = doc.expect_node(&point.container)?;
            Some(
                container
                    .children
                    .get(point.from..point.to)
                    .unwrap_or_default()
                    .to_vec(),
            )
        }
    };

    let constructed = spec.construct(1, content, translator);
    let nested = nested_kinds([&constructed.node]);
    let mut transaction = Transaction::new().with_created_resource(&constructed.resource);
    transaction.push(Step::ReplaceChildren {
        parent: point.container.clone(),
        from: point.from,
        to: point.to,
        nodes: vec![constructed.node],
    });
    if let Some(step) = record_containment(
        doc,
        state.graph(),
        &point.container,
        &constructed.resource,
        &spec.relationship_predicate,
    ) {
        transaction.push(step);
    }

    let inserted = doc.apply(&transaction)?;
    renumber_after(
        inserted,
        &point.target(),
        spec,
        &nested,
        registry,
        &mut transaction,
    )?;

    tracing::info!(
        structure = spec.name(),
        resource = %constructed.resource,
        container = %point.container,
        wrapped = point.mode == InsertMode::Wrap,
        "Inserted structure"
    );
    Ok(Some(transaction))
}
