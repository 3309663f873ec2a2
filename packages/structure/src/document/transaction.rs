//! Atomic tree edits.
//!
//! A [`Transaction`] is an ordered list of [`Step`]s. Each step addresses the
//! tree as left by the previous step. Applying a transaction either applies
//! every step or returns an error and leaves the input untouched.

use super::node::{Node, Property, NUMBER_ATTR};
use super::path::NodePath;
use super::tree::Document;
use crate::error::{Result, StructureError};

/// A single tree edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Replace children `from..to` of `parent` with `nodes`.
    ReplaceChildren {
        parent: NodePath,
        from: usize,
        to: usize,
        nodes: Vec<Node>,
    },

    /// Set one attribute of the node at `path`.
    SetAttr {
        path: NodePath,
        name: String,
        value: String,
    },

    /// Swap two children of `parent`.
    SwapChildren { parent: NodePath, a: usize, b: usize },

    /// Record an explicit property on the node at `subject`.
    AddProperty { subject: NodePath, property: Property },

    /// Drop an explicit property from the node at `subject`.
    RemoveProperty { subject: NodePath, property: Property },
}

impl Step {
    /// Step that rewrites a displayed number.
    #[must_use]
    pub fn set_number(header: NodePath, number: impl Into<String>) -> Self {
        Self::SetAttr {
            path: header,
            name: NUMBER_ATTR.to_string(),
            value: number.into(),
        }
    }

    fn apply(&self, doc: &mut Document) -> std::result::Result<(), String> {
        match self {
            Self::ReplaceChildren {
                parent,
                from,
                to,
                nodes,
            } => {
                let node = doc
                    .node_at_mut(parent)
                    .ok_or_else(|| format!("no node at {parent}"))?;
                if from > to || *to > node.children.len() {
                    return Err(format!(
                        "range {from}..{to} out of bounds for {} children",
                        node.children.len()
                    ));
                }
                node.children.splice(*from..*to, nodes.iter().cloned());
            }
            Self::SetAttr { path, name, value } => {
                let node = doc
                    .node_at_mut(path)
                    .ok_or_else(|| format!("no node at {path}"))?;
                node.attrs.insert(name.clone(), value.clone());
            }
            Self::SwapChildren { parent, a, b } => {
                let node = doc
                    .node_at_mut(parent)
                    .ok_or_else(|| format!("no node at {parent}"))?;
                let len = node.children.len();
                if *a >= len || *b >= len {
                    return Err(format!("swap {a}<->{b} out of bounds for {len} children"));
                }
                node.children.swap(*a, *b);
            }
            Self::AddProperty { subject, property } => {
                let node = doc
                    .node_at_mut(subject)
                    .ok_or_else(|| format!("no node at {subject}"))?;
                if node.resource().is_none() {
                    return Err(format!("node at {subject} has no resource"));
                }
                if !node.properties.contains(property) {
                    node.properties.push(property.clone());
                }
            }
            Self::RemoveProperty { subject, property } => {
                let node = doc
                    .node_at_mut(subject)
                    .ok_or_else(|| format!("no node at {subject}"))?;
                node.properties.retain(|p| p != property);
            }
        }
        Ok(())
    }
}

/// An ordered list of steps applied as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    steps: Vec<Step>,
    created_resource: Option<String>,
}

impl Transaction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Append all steps of another transaction.
    pub fn extend(&mut self, other: Transaction) {
        self.steps.extend(other.steps);
        if other.created_resource.is_some() {
            self.created_resource = other.created_resource;
        }
    }

    /// Remember the resource minted by this transaction.
    #[must_use]
    pub fn with_created_resource(mut self, resource: impl Into<String>) -> Self {
        self.created_resource = Some(resource.into());
        self
    }

    /// Resource minted by this transaction, if any.
    #[must_use]
    pub fn created_resource(&self) -> Option<&str> {
        self.created_resource.as_deref()
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl Document {
    /// Apply a transaction, producing a new document.
    ///
    /// # Errors
    /// Returns `StepFailed` for the first step that cannot be applied and
    /// `DuplicateResource` if the result would violate resource uniqueness.
    pub fn apply(&self, transaction: &Transaction) -> Result<Document> {
        let mut next = self.clone();
        for (index, step) in transaction.steps().iter().enumerate() {
            step.apply(&mut next)
                .map_err(|reason| StructureError::StepFailed { index, reason })?;
        }
        next.check_unique_resources()?;
        Ok(next)
    }
}
