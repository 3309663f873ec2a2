//! Structure registry.

use std::collections::HashMap;

use super::types::{StructureSpec, StructureType};
use crate::document::NodeKind;
use crate::error::{Result, StructureError};

/// Registry of structure specifications.
#[derive(Debug, Clone)]
pub struct StructureRegistry {
    specs: HashMap<StructureType, StructureSpec>,
}

impl StructureRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// Register a specification, replacing any previous one for its type.
    pub fn register(&mut self, spec: StructureSpec) {
        self.specs.insert(spec.structure_type, spec);
    }

    /// Get the specification for a structure type.
    #[must_use]
    pub fn get(&self, structure_type: StructureType) -> Option<&StructureSpec> {
        self.specs.get(&structure_type)
    }

    /// Look up a specification by name.
    ///
    /// # Errors
    /// Returns `UnknownStructure` when no specification is registered under
    /// `name`.
    pub fn lookup(&self, name: &str) -> Result<&StructureSpec> {
        StructureType::from_name(name)
            .and_then(|t| self.get(t))
            .ok_or_else(|| StructureError::UnknownStructure(name.to_string()))
    }

    /// Specification for the structure whose node kind is `kind`.
    #[must_use]
    pub fn spec_for_kind(&self, kind: NodeKind) -> Option<&StructureSpec> {
        StructureType::from_node_kind(kind).and_then(|t| self.get(t))
    }

    /// Select specifications by name.
    ///
    /// Without a filter every registered specification is returned. With a
    /// filter each name must be registered.
    ///
    /// # Errors
    /// Returns `UnknownStructure` for the first unregistered name.
    pub fn select(&self, names: Option<&[String]>) -> Result<Vec<&StructureSpec>> {
        match names {
            None => Ok(self.iter().collect()),
            Some(names) => names.iter().map(|name| self.lookup(name)).collect(),
        }
    }

    /// Registered specifications, outermost type first.
    pub fn iter(&self) -> impl Iterator<Item = &StructureSpec> {
        StructureType::ALL
            .into_iter()
            .filter_map(|t| self.specs.get(&t))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for StructureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
