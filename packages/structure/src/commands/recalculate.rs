//! Recalculate every structure number in the document.

use crate::document::Transaction;
use crate::error::Result;
use crate::numbering::renumber_document;
use crate::state::EditorState;
use crate::structure::StructureRegistry;

/// Renumber all registered structure types over the whole document.
///
/// Types are processed outermost first, each on the document as left by the
/// previous one. An already consistent document yields an empty
/// transaction.
///
/// # Errors
/// Returns `StepFailed` if an intermediate pass cannot be applied.
pub fn recalculate_all(state: &EditorState, registry: &StructureRegistry) -> Result<Transaction> {
    let mut doc = state.doc().clone();
    let mut transaction = Transaction::new();

    for spec in registry.iter() {
        let pass = renumber_document(&doc, spec);
        if pass.is_empty() {
            continue;
        }
        doc = doc.apply(&pass)?;
        transaction.extend(pass);
    }

    tracing::info!(edits = transaction.len(), "Recalculated structure numbers");
    Ok(transaction)
}
