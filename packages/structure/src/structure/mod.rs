//! Structure specifications and their registry.
//!
//! Each structural type (title, chapter, section, subsection, article) is
//! described by a [`StructureSpec`]: where it may live, how it is numbered
//! and how a fresh instance is built.

mod config;
mod numeral;
mod registry;
mod types;

pub use config::create_default_structures;
pub use numeral::{parse_roman, romanize, NumberFormat};
pub use registry::StructureRegistry;
pub use types::{Constructed, Placeholders, StructureSpec, StructureType};
