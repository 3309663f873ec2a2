//! Editor state: one document plus its derived graph.

use crate::document::{Document, Transaction};
use crate::error::Result;
use crate::graph::GraphIndex;
use crate::markup::{parse_document, write_document_pretty};

/// An immutable snapshot of the edited document.
///
/// The graph index is always rebuilt from the document it belongs to, so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    doc: Document,
    graph: GraphIndex,
}

impl EditorState {
    /// Create a state for a document.
    #[must_use]
    pub fn new(doc: Document) -> Self {
        let graph = GraphIndex::build(&doc);
        Self { doc, graph }
    }

    /// Parse a state from markup.
    ///
    /// # Errors
    /// Returns the parse error of [`parse_document`].
    pub fn from_markup(markup: &str) -> Result<Self> {
        Ok(Self::new(parse_document(markup)?))
    }

    #[must_use]
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    #[must_use]
    pub fn graph(&self) -> &GraphIndex {
        &self.graph
    }

    /// Apply a transaction, producing the next state.
    ///
    /// Either every step applies and the graph is rebuilt for the new
    /// document, or an error is returned and `self` stays the current state.
    ///
    /// # Errors
    /// Returns `StepFailed` or `DuplicateResource` from [`Document::apply`].
    pub fn apply(&self, transaction: &Transaction) -> Result<Self> {
        let doc = self.doc.apply(transaction)?;
        tracing::debug!(steps = transaction.len(), "Applied transaction");
        Ok(Self::new(doc))
    }

    /// Serialize the document.
    #[must_use]
    pub fn to_markup(&self) -> String {
        write_document_pretty(&self.doc)
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Document::empty())
    }
}
