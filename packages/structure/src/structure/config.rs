//! Default structure catalogue for decisions.

use super::numeral::NumberFormat;
use super::registry::StructureRegistry;
use super::types::{StructureSpec, StructureType};
use crate::document::NodeKind;
use crate::namespace::SAY;

/// Create the registry of structures available in a decision.
///
/// ```text
/// article_container
/// ├── title (I, II, ...)
/// │   └── title_body
/// │       ├── chapter (I, II, ...)
/// │       │   └── chapter_body
/// │       │       ├── section (I, II, ...)
/// │       │       │   └── section_body
/// │       │       │       ├── subsection (1, 2, ...)
/// │       │       │       │   └── subsection_body
/// │       │       │       │       └── article
/// │       │       │       └── article
/// │       │       └── article
/// │       └── article
/// └── article (1, 2, ... across the whole decision)
/// ```
#[must_use]
pub fn create_default_structures() -> StructureRegistry {
    let mut registry = StructureRegistry::new();

    registry.register(
        StructureSpec::new(StructureType::Title)
            .with_context([NodeKind::ArticleContainer])
            .with_number_format(NumberFormat::Roman)
            .with_header_level(1),
    );

    registry.register(
        StructureSpec::new(StructureType::Chapter)
            .with_context([NodeKind::ArticleContainer, NodeKind::TitleBody])
            .with_number_format(NumberFormat::Roman)
            .with_header_level(2),
    );

    registry.register(
        StructureSpec::new(StructureType::Section)
            .with_context([NodeKind::ChapterBody])
            .with_number_format(NumberFormat::Roman)
            .with_header_level(3),
    );

    registry.register(
        StructureSpec::new(StructureType::Subsection)
            .with_context([NodeKind::SectionBody])
            .with_number_format(NumberFormat::Arabic)
            .with_header_level(4),
    );

    // Articles are numbered across the whole decision
    registry.register(
        StructureSpec::new(StructureType::Article)
            .with_context([
                NodeKind::ArticleContainer,
                NodeKind::TitleBody,
                NodeKind::ChapterBody,
                NodeKind::SectionBody,
                NodeKind::SubsectionBody,
            ])
            .with_continuous(true)
            .with_number_format(NumberFormat::Arabic)
            .with_header_level(5)
            .with_insert_predicate(SAY.term("hasPart")),
    );

    registry
}
