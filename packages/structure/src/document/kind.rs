//! Node kinds of the document tree.

use std::fmt;

/// Closed set of node kinds.
///
/// The tag returned by [`NodeKind::tag`] is the element name used in the
/// markup serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    /// Document root.
    Doc,
    /// Decision (besluit), the semantic parent of top-level structures.
    Besluit,
    /// Heading of a decision.
    BesluitTitle,
    /// Body of a decision holding its structures.
    ArticleContainer,
    /// Plain block of text.
    Paragraph,
    /// Placeholder shown until the user types.
    Placeholder,
    /// Character data.
    Text,
    /// Title (titel).
    Title,
    TitleBody,
    /// Chapter (hoofdstuk).
    Chapter,
    ChapterBody,
    /// Section (afdeling).
    Section,
    SectionBody,
    /// Subsection (onderafdeling).
    Subsection,
    SubsectionBody,
    /// Article (artikel).
    Article,
    ArticleBody,
    /// Numbered heading shared by all structures.
    StructureHeader,
    /// Numbered paragraph inside an article body.
    ArticleParagraph,
}

impl NodeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NodeKind; 19] = [
        Self::Doc,
        Self::Besluit,
        Self::BesluitTitle,
        Self::ArticleContainer,
        Self::Paragraph,
        Self::Placeholder,
        Self::Text,
        Self::Title,
        Self::TitleBody,
        Self::Chapter,
        Self::ChapterBody,
        Self::Section,
        Self::SectionBody,
        Self::Subsection,
        Self::SubsectionBody,
        Self::Article,
        Self::ArticleBody,
        Self::StructureHeader,
        Self::ArticleParagraph,
    ];

    /// Markup tag name.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Doc => "doc",
            Self::Besluit => "besluit",
            Self::BesluitTitle => "besluit_title",
            Self::ArticleContainer => "article_container",
            Self::Paragraph => "paragraph",
            Self::Placeholder => "placeholder",
            Self::Text => "text",
            Self::Title => "title",
            Self::TitleBody => "title_body",
            Self::Chapter => "chapter",
            Self::ChapterBody => "chapter_body",
            Self::Section => "section",
            Self::SectionBody => "section_body",
            Self::Subsection => "subsection",
            Self::SubsectionBody => "subsection_body",
            Self::Article => "article",
            Self::ArticleBody => "article_body",
            Self::StructureHeader => "structure_header",
            Self::ArticleParagraph => "article_paragraph",
        }
    }

    /// Parse a markup tag name.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Legally meaningful division carrying a resource and a number.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::Title | Self::Chapter | Self::Section | Self::Subsection | Self::Article
        )
    }

    /// Body element of a structure.
    #[must_use]
    pub fn is_structure_body(&self) -> bool {
        matches!(
            self,
            Self::TitleBody
                | Self::ChapterBody
                | Self::SectionBody
                | Self::SubsectionBody
                | Self::ArticleBody
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
