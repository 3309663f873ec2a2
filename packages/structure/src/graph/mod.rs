//! Property-graph mirror of the document tree.
//!
//! The graph is never stored on its own: [`GraphIndex::build`] derives it
//! from a document version, and the only triples that are not implied by
//! node attributes are the explicit properties recorded on nodes.

mod index;
mod sync;
mod term;

pub use index::{GraphIndex, EXACT_PREFIX};
pub use sync::{record_containment, semantic_parent};
pub use term::{Term, Triple};
