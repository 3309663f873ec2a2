//! Move a structure among its siblings.

use std::fmt;
use std::str::FromStr;

use super::{nested_kinds, renumber_after};
use crate::document::{Step, Transaction};
use crate::error::Result;
use crate::state::EditorState;
use crate::structure::StructureRegistry;

/// Direction of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the start of the container.
    Up,
    /// Towards the end of the container.
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(format!("unknown direction '{other}', expected 'up' or 'down'")),
        }
    }
}

/// Swap the structure carrying `resource` with its nearest same-type sibling
/// in `direction`, then renumber its scope.
///
/// Returns `Ok(None)` when the resource is unknown, is not a registered
/// structure, or has no sibling of its type in that direction.
///
/// # Errors
/// Returns `StepFailed` if the swap cannot be applied to the document.
pub fn move_structure(
    state: &EditorState,
    registry: &StructureRegistry,
    resource: &str,
    direction: Direction,
) -> Result<Option<Transaction>> {
    let doc = state.doc();
    let Some(path) = doc.find_resource(resource) else {
        tracing::debug!(resource = %resource, "Resource not found, nothing to move");
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
    let siblings = &doc.expect_node(&parent)?.children;

    let other = match direction {
        Direction::Up => siblings
            .get(..index)
            .and_then(|before| before.iter().rposition(|c| c.kind == node.kind)),
        Direction::Down => siblings
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, c)| c.kind == node.kind)
            .map(|(i, _)| i),
    };
    let Some(other) = other else {
        tracing::debug!(resource = %resource, direction = %direction, "No sibling to swap with");
        return Ok(None);
    };

    let mut transaction = Transaction::new();
    transaction.push(Step::SwapChildren {
        parent: parent.clone(),
        a: index,
        b: other,
    });

    let nested = nested_kinds([siblings.get(index), siblings.get(other)].into_iter().flatten());
    let moved = doc.apply(&transaction)?;
    renumber_after(
        moved,
        &parent.child(other),
        spec,
        &nested,
        registry,
        &mut transaction,
    )?;

    tracing::info!(
        structure = spec.name(),
        resource = %resource,
        direction = %direction,
        "Moved structure"
    );
    Ok(Some(transaction))
}
