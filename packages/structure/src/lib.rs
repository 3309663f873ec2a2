//! RegelRecht Structure - Insert, number and move legal document structures.
//!
//! This crate provides the structure engine behind a decision (besluit)
//! editor: it inserts titles, chapters, sections, subsections and articles
//! at a cursor, keeps their displayed numbers consistent, moves and removes
//! them, and mirrors the structural relationships into a property graph.
//!
//! # Example
//!
//! ```
//! use regelrecht_structure::{create_default_structures, insert_structure, EditorState};
//! use regelrecht_structure::config::parse_cursor_path;
//! use regelrecht_structure::i18n::KeyTranslator;
//!
//! let state = EditorState::from_markup(
//!     r#"<doc><besluit resource="http://data.lblod.info/besluiten/1">
//!          <article_container property="say:body"/>
//!        </besluit></doc>"#,
//! )
//! .unwrap();
//! let registry = create_default_structures();
//! let cursor = parse_cursor_path("0/0").unwrap();
//!
//! let tx = insert_structure(&state, &registry, &cursor, "article", None, &KeyTranslator)
//!     .unwrap()
//!     .unwrap();
//! let next = state.apply(&tx).unwrap();
//! let article = next.doc().find_resource(tx.created_resource().unwrap()).unwrap();
//! assert_eq!(next.doc().node_at(&article).unwrap().displayed_number(), Some("1"));
//! ```
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`error`]: Error types and Result alias
//! - [`namespace`]: RDF namespaces and prefixed names
//! - [`document`]: Document tree, paths and transactions
//! - [`markup`]: Markup parsing and serialization
//! - [`structure`]: Structure types, registry and numerals
//! - [`graph`]: Property graph derived from the tree
//! - [`numbering`]: Ordinal assignment per numbering scope
//! - [`resolver`]: Insertion point resolution
//! - [`commands`]: Insert, move, remove and recalculate
//! - [`state`]: Editor state (tree plus graph)
//! - [`i18n`]: Placeholder translation
//! - [`yaml`]: YAML outline and triple reports
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod graph;
pub mod i18n;
pub mod markup;
pub mod namespace;
pub mod numbering;
pub mod resolver;
pub mod state;
pub mod structure;
pub mod yaml;

// Re-export main functions
pub use commands::{insert_structure, move_structure, recalculate_all, remove_structure, Direction};

// Re-export commonly used items
pub use document::{Document, Node, NodeKind, NodePath, Transaction};
pub use error::{Result, StructureError};
pub use state::EditorState;
pub use structure::{create_default_structures, StructureRegistry, StructureSpec, StructureType};
