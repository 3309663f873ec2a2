//! Structure types and their specifications.

use std::fmt;

use uuid::Uuid;

use super::numeral::NumberFormat;
use crate::config::{
    ARTICLE_RESOURCE_BASE, CHAPTER_RESOURCE_BASE, SECTION_RESOURCE_BASE,
    SUBSECTION_RESOURCE_BASE, TITLE_RESOURCE_BASE,
};
use crate::document::{
    Document, Node, NodeKind, NodePath, Step, NUMBER_ATTR, PROPERTY_ATTR, RESOURCE_ATTR,
    TYPEOF_ATTR,
};
use crate::i18n::Translate;
use crate::namespace::{Resource, SAY};

/// The legally meaningful divisions of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StructureType {
    /// Titel.
    Title,
    /// Hoofdstuk.
    Chapter,
    /// Afdeling.
    Section,
    /// Onderafdeling.
    Subsection,
    /// Artikel.
    Article,
}

impl StructureType {
    /// All types, outermost first.
    pub const ALL: [StructureType; 5] = [
        Self::Title,
        Self::Chapter,
        Self::Section,
        Self::Subsection,
        Self::Article,
    ];

    /// Registry name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.node_kind().tag()
    }

    /// Parse a registry name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Node kind of the structure itself.
    #[must_use]
    pub fn node_kind(&self) -> NodeKind {
        match self {
            Self::Title => NodeKind::Title,
            Self::Chapter => NodeKind::Chapter,
            Self::Section => NodeKind::Section,
            Self::Subsection => NodeKind::Subsection,
            Self::Article => NodeKind::Article,
        }
    }

    /// Node kind of the structure's body.
    #[must_use]
    pub fn body_kind(&self) -> NodeKind {
        match self {
            Self::Title => NodeKind::TitleBody,
            Self::Chapter => NodeKind::ChapterBody,
            Self::Section => NodeKind::SectionBody,
            Self::Subsection => NodeKind::SubsectionBody,
            Self::Article => NodeKind::ArticleBody,
        }
    }

    /// Structure type of a node kind, if it is structural.
    #[must_use]
    pub fn from_node_kind(kind: NodeKind) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.node_kind() == kind)
    }

    /// Default prefix for minted resources.
    #[must_use]
    pub fn resource_base(&self) -> &'static str {
        match self {
            Self::Title => TITLE_RESOURCE_BASE,
            Self::Chapter => CHAPTER_RESOURCE_BASE,
            Self::Section => SECTION_RESOURCE_BASE,
            Self::Subsection => SUBSECTION_RESOURCE_BASE,
            Self::Article => ARTICLE_RESOURCE_BASE,
        }
    }

    /// RDF class local name in the `say:` vocabulary.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Chapter => "Chapter",
            Self::Section => "Section",
            Self::Subsection => "Subsection",
            Self::Article => "Article",
        }
    }
}

impl fmt::Display for StructureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Translation keys for placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub heading: String,
    pub body: String,
}

impl Placeholders {
    /// Default keys for a structure type.
    #[must_use]
    pub fn for_type(structure_type: StructureType) -> Self {
        let name = structure_type.name();
        Self {
            heading: format!("article-structure-plugin.placeholder.{name}.heading"),
            body: format!("article-structure-plugin.placeholder.{name}.body"),
        }
    }
}

/// A freshly constructed structure subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructed {
    /// The structure node, with header and body.
    pub node: Node,

    /// The resource minted for it.
    pub resource: String,
}

/// Declarative policy for one structure type.
///
/// Specifications are stateless: constructing, renumbering and reading
/// content only inspect the document passed in.
#[derive(Debug, Clone)]
pub struct StructureSpec {
    /// The structure type.
    pub structure_type: StructureType,

    /// Kinds of immediate container the structure may live in.
    pub context: Vec<NodeKind>,

    /// Whether numbering continues across containers.
    pub continuous: bool,

    /// Restrict insertion to the subtree of a node of this kind.
    pub limit_to: Option<NodeKind>,

    /// Predicate of the containment triple.
    pub relationship_predicate: Resource,

    /// Predicate used to find an alternative insertion anchor.
    pub insert_predicate: Option<Resource>,

    /// Numeral style.
    pub number_format: NumberFormat,

    /// Heading level of the header.
    pub header_level: u8,

    /// Prefix for minted resources.
    pub resource_base: String,

    /// RDF class.
    pub rdf_type: Resource,

    /// Translation keys for placeholder text.
    pub placeholders: Placeholders,
}

impl StructureSpec {
    /// Create a specification with defaults for the type.
    #[must_use]
    pub fn new(structure_type: StructureType) -> Self {
        Self {
            structure_type,
            context: Vec::new(),
            continuous: false,
            limit_to: None,
            relationship_predicate: SAY.term("hasPart"),
            insert_predicate: None,
            number_format: NumberFormat::Arabic,
            header_level: 1,
            resource_base: structure_type.resource_base().to_string(),
            rdf_type: SAY.term(structure_type.class_name()),
            placeholders: Placeholders::for_type(structure_type),
        }
    }

    /// Set the allowed container kinds.
    #[must_use]
    pub fn with_context(mut self, context: impl IntoIterator<Item = NodeKind>) -> Self {
        self.context = context.into_iter().collect();
        self
    }

    /// Set the numbering discipline.
    #[must_use]
    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    /// Restrict insertion to a subtree.
    #[must_use]
    pub fn with_limit_to(mut self, kind: NodeKind) -> Self {
        self.limit_to = Some(kind);
        self
    }

    /// Set the containment predicate.
    #[must_use]
    pub fn with_relationship_predicate(mut self, predicate: Resource) -> Self {
        self.relationship_predicate = predicate;
        self
    }

    /// Set the insertion-anchor predicate.
    #[must_use]
    pub fn with_insert_predicate(mut self, predicate: Resource) -> Self {
        self.insert_predicate = Some(predicate);
        self
    }

    /// Set the numeral style.
    #[must_use]
    pub fn with_number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = format;
        self
    }

    /// Set the header level.
    #[must_use]
    pub fn with_header_level(mut self, level: u8) -> Self {
        self.header_level = level;
        self
    }

    /// Set the resource prefix.
    #[must_use]
    pub fn with_resource_base(mut self, base: impl Into<String>) -> Self {
        self.resource_base = base.into();
        self
    }

    /// Registry name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.structure_type.name()
    }

    /// Node kind of this structure.
    #[must_use]
    pub fn node_kind(&self) -> NodeKind {
        self.structure_type.node_kind()
    }

    /// Node kind of this structure's body.
    #[must_use]
    pub fn body_kind(&self) -> NodeKind {
        self.structure_type.body_kind()
    }

    /// Whether `kind` is a valid immediate container.
    #[must_use]
    pub fn allows_container(&self, kind: NodeKind) -> bool {
        self.context.contains(&kind)
    }

    /// Build a new structure numbered `ordinal`.
    ///
    /// `content` becomes the body; without it the body holds a placeholder
    /// paragraph.
    #[must_use]
    pub fn construct(
        &self,
        ordinal: u32,
        content: Option<Vec<Node>>,
        translator: &dyn Translate,
    ) -> Constructed {
        let resource = format!("{}{}", self.resource_base, Uuid::new_v4());

        let header = self.header(ordinal, translator);
        let body_children = content.unwrap_or_else(|| {
            vec![Node::new(NodeKind::Paragraph).with_child(Node::placeholder(
                translator.translate(&self.placeholders.body),
            ))]
        });
        let body = Node::new(self.body_kind())
            .with_attr(PROPERTY_ATTR, SAY.term("body").prefixed())
            .with_children(body_children);

        let node = Node::new(self.node_kind())
            .with_attr(RESOURCE_ATTR, resource.as_str())
            .with_attr(TYPEOF_ATTR, self.rdf_type.prefixed())
            .with_child(header)
            .with_child(body);

        Constructed { node, resource }
    }

    fn header(&self, ordinal: u32, translator: &dyn Translate) -> Node {
        Node::new(NodeKind::StructureHeader)
            .with_attr("level", self.header_level.to_string())
            .with_attr(NUMBER_ATTR, self.number_format.format(ordinal))
            .with_attr(PROPERTY_ATTR, SAY.term("heading").prefixed())
            .with_child(Node::placeholder(
                translator.translate(&self.placeholders.heading),
            ))
    }

    /// Edit that shows `ordinal` on the structure at `path`.
    ///
    /// Only the header's number attribute is rewritten. A structure without
    /// a header gets a fresh one.
    #[must_use]
    pub fn update_number(&self, structure: &Node, path: &NodePath, ordinal: u32) -> Step {
        match structure.child_index_of_kind(NodeKind::StructureHeader) {
            Some(index) => Step::set_number(path.child(index), self.number_format.format(ordinal)),
            None => Step::ReplaceChildren {
                parent: path.clone(),
                from: 0,
                to: 0,
                nodes: vec![Node::new(NodeKind::StructureHeader)
                    .with_attr("level", self.header_level.to_string())
                    .with_attr(NUMBER_ATTR, self.number_format.format(ordinal))
                    .with_attr(PROPERTY_ATTR, SAY.term("heading").prefixed())],
            },
        }
    }

    /// The body content of the structure at `path`.
    #[must_use]
    pub fn content<'a>(&self, doc: &'a Document, path: &NodePath) -> Option<&'a [Node]> {
        let node = doc.node_at(path)?;
        if node.kind != self.node_kind() {
            return None;
        }
        node.child_of_kind(self.body_kind())
            .map(|body| body.children.as_slice())
    }

    /// The ordinal currently displayed on a structure, 0 when unreadable.
    #[must_use]
    pub fn displayed_ordinal(&self, structure: &Node) -> u32 {
        structure
            .displayed_number()
            .and_then(|n| self.number_format.parse(n))
            .unwrap_or(0)
    }
}
