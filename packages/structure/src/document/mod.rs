//! Document tree model.
//!
//! The tree is the single source of truth for a document. Structural nodes
//! carry a `resource` attribute, their number lives on their
//! `structure_header` child, and edits are expressed as [`Transaction`]s.

mod kind;
mod node;
mod path;
mod transaction;
mod tree;

pub use kind::NodeKind;
pub use node::{Node, Property, NUMBER_ATTR, PROPERTY_ATTR, RESOURCE_ATTR, TYPEOF_ATTR};
pub use path::NodePath;
pub use transaction::{Step, Transaction};
pub use tree::Document;
