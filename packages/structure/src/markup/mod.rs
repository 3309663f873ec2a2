//! Markup form of the document tree.
//!
//! Every node is written as an element named after its kind, with its
//! attributes verbatim. Character data becomes text nodes (blank or adjacent
//! runs are written as `<text>` elements so they survive parsing), and explicit
//! relationship triples are written as `<link property="..." href="..."/>`
//! children of their subject node:
//!
//! ```text
//! <doc>
//!   <besluit resource="http://data.lblod.info/besluiten/1" typeof="besluit:Besluit">
//!     <link property="say:hasPart" href="http://data.lblod.info/articles/a"/>
//!     <article_container property="say:body">
//!       <article resource="http://data.lblod.info/articles/a" typeof="say:Article">
//!         <structure_header level="5" number="1">...</structure_header>
//!         <article_body>...</article_body>
//!       </article>
//!     </article_container>
//!   </besluit>
//! </doc>
//! ```

mod parse;
mod write;

use roxmltree::Node as XmlNode;

pub use parse::parse_document;
pub use write::{write_document, write_document_pretty};

/// Element used for explicit properties.
pub const LINK_TAG: &str = "link";

/// Attribute of a `<link>` holding the object URI.
pub const LINK_HREF_ATTR: &str = "href";

/// Get the tag name without namespace prefix.
pub(crate) fn get_tag_name<'a>(node: XmlNode<'a, '_>) -> &'a str {
    node.tag_name().name()
}
