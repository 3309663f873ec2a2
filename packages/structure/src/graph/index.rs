//! Triple index derived from a document.

use std::collections::{HashMap, HashSet};

use super::term::{Term, Triple};
use crate::document::{Document, TYPEOF_ATTR};
use crate::namespace::{expand_prefixed, ELI, RDF};

/// Prefix binding a pattern argument to its exact remainder.
pub const EXACT_PREFIX: char = '>';

/// Read-only view of the property graph of one document version.
///
/// The index is derived entirely from the tree:
///
/// - `(resource, rdf:type, typeof)` for every typed node,
/// - `(resource, eli:number, "n"^^xsd:string)` for every structure whose
///   header shows a number,
/// - every explicit property recorded on a node.
///
/// Triples are kept in document order of their subject node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphIndex {
    triples: Vec<Triple>,
    lookup: HashSet<Triple>,
    by_subject: HashMap<String, Vec<usize>>,
}

impl GraphIndex {
    /// Build the index for a document.
    #[must_use]
    pub fn build(doc: &Document) -> Self {
        let mut index = Self::default();
        let rdf_type = RDF.term("type");
        let eli_number = ELI.term("number");

        for (_, node) in doc.descendants() {
            let Some(subject) = node.resource() else {
                continue;
            };

            if let Some(types) = node.attr(TYPEOF_ATTR) {
                for class in types.split_whitespace() {
                    index.insert(Triple::new(
                        subject,
                        rdf_type.full(),
                        Term::named(expand_prefixed(class)),
                    ));
                }
            }

            if node.is_structural() {
                if let Some(number) = node.displayed_number() {
                    index.insert(Triple::new(subject, eli_number.full(), Term::string(number)));
                }
            }

            for property in &node.properties {
                index.insert(Triple::new(
                    subject,
                    expand_prefixed(&property.predicate),
                    Term::named(expand_prefixed(&property.object)),
                ));
            }
        }

        tracing::debug!(triples = index.len(), "Built graph index");
        index
    }

    fn insert(&mut self, triple: Triple) {
        if self.lookup.contains(&triple) {
            return;
        }
        self.by_subject
            .entry(triple.subject.clone())
            .or_default()
            .push(self.triples.len());
        self.lookup.insert(triple.clone());
        self.triples.push(triple);
    }

    /// Triples matching a pattern, in document order.
    ///
    /// `None` matches anything. An argument starting with `>` is bound to
    /// the exact remainder; any other argument has known prefixes expanded
    /// (`say:hasPart` matches the full `hasPart` URI).
    ///
    /// # Examples
    /// ```
    /// use regelrecht_structure::document::{Document, Node, NodeKind, Property};
    /// use regelrecht_structure::graph::GraphIndex;
    ///
    /// let root = Node::new(NodeKind::Doc).with_child(
    ///     Node::new(NodeKind::Besluit)
    ///         .with_attr("resource", "http://data.lblod.info/besluiten/1")
    ///         .with_property(Property::new("say:hasPart", "http://data.lblod.info/articles/a")),
    /// );
    /// let graph = GraphIndex::build(&Document::new(root).unwrap());
    ///
    /// assert_eq!(graph.match_pattern(None, Some("say:hasPart"), None).len(), 1);
    /// assert!(graph.match_pattern(None, Some(">say:hasPart"), None).is_empty());
    /// ```
    #[must_use]
    pub fn match_pattern(
        &self,
        subject: Option<&str>,
        predicate: Option<&str>,
        object: Option<&str>,
    ) -> Vec<&Triple> {
        let subject = subject.map(bind);
        let predicate = predicate.map(bind);
        let object = object.map(bind);

        let candidates: Box<dyn Iterator<Item = &Triple> + '_> = match &subject {
            Some(s) => Box::new(
                self.by_subject
                    .get(s)
                    .into_iter()
                    .flatten()
                    .filter_map(|&i| self.triples.get(i)),
            ),
            None => Box::new(self.triples.iter()),
        };

        candidates
            .filter(|t| predicate.as_ref().is_none_or(|p| &t.predicate == p))
            .filter(|t| object.as_ref().is_none_or(|o| t.object.value() == o))
            .collect()
    }

    /// Whether the graph holds `(subject, predicate, named object)`.
    ///
    /// Arguments are bound the same way as in [`GraphIndex::match_pattern`].
    #[must_use]
    pub fn contains(&self, subject: &str, predicate: &str, object: &str) -> bool {
        self.lookup
            .contains(&Triple::new(bind(subject), bind(predicate), Term::named(bind(object))))
    }

    /// All triples in document order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}

fn bind(argument: &str) -> String {
    match argument.strip_prefix(EXACT_PREFIX) {
        Some(exact) => exact.to_string(),
        None => expand_prefixed(argument),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Node, NodeKind, Property, NUMBER_ATTR, RESOURCE_ATTR};
    use crate::namespace::SAY;

    const BESLUIT: &str = "http://data.lblod.info/besluiten/1";
    const ARTICLE_A: &str = "http://data.lblod.info/articles/a";
    const ARTICLE_B: &str = "http://data.lblod.info/articles/b";

    fn article(resource: &str, number: &str) -> Node {
        Node::new(NodeKind::Article)
            .with_attr(RESOURCE_ATTR, resource)
            .with_attr(TYPEOF_ATTR, "say:Article")
            .with_child(Node::new(NodeKind::StructureHeader).with_attr(NUMBER_ATTR, number))
    }

    fn sample() -> Document {
        let root = Node::new(NodeKind::Doc).with_child(
            Node::new(NodeKind::Besluit)
                .with_attr(RESOURCE_ATTR, BESLUIT)
                .with_attr(TYPEOF_ATTR, "besluit:Besluit ext:BesluitNieuweStijl")
                .with_property(Property::new("say:hasPart", ARTICLE_A))
                .with_property(Property::new(SAY.term("hasPart").full(), ARTICLE_B))
                .with_child(
                    Node::new(NodeKind::ArticleContainer)
                        .with_child(article(ARTICLE_A, "1"))
                        .with_child(article(ARTICLE_B, "2")),
                ),
        );
        Document::new(root).unwrap()
    }

    #[test]
    fn test_build_derives_triples() {
        let graph = GraphIndex::build(&sample());
        // 2 besluit types + 2 parts + 2 * (type + number)
        assert_eq!(graph.len(), 8);
        assert!(graph.contains(BESLUIT, "rdf:type", "besluit:Besluit"));
        assert!(graph.contains(BESLUIT, "rdf:type", "ext:BesluitNieuweStijl"));
        assert!(graph.contains(ARTICLE_A, "rdf:type", "say:Article"));
        assert!(graph.contains(BESLUIT, "say:hasPart", ARTICLE_B));
    }

    #[test]
    fn test_numbers_are_literals() {
        let graph = GraphIndex::build(&sample());
        let numbers = graph.match_pattern(None, Some("eli:number"), None);
        let values: Vec<_> = numbers.iter().map(|t| t.object.value()).collect();
        assert_eq!(values, vec!["1", "2"]);
        assert!(!numbers[0].object.is_named());
    }

    #[test]
    fn test_match_pattern_document_order() {
        let graph = GraphIndex::build(&sample());
        let parts = graph.match_pattern(Some(BESLUIT), Some("say:hasPart"), None);
        let objects: Vec<_> = parts.iter().map(|t| t.object.value()).collect();
        assert_eq!(objects, vec![ARTICLE_A, ARTICLE_B]);
    }

    #[test]
    fn test_match_pattern_exact_binding() {
        let graph = GraphIndex::build(&sample());
        let full = SAY.term("hasPart").full().to_string();
        assert_eq!(
            graph
                .match_pattern(None, Some(&format!(">{full}")), Some(ARTICLE_A))
                .len(),
            1
        );
        assert!(graph.match_pattern(None, Some(">say:hasPart"), None).is_empty());
    }

    #[test]
    fn test_match_pattern_unbound() {
        let graph = GraphIndex::build(&sample());
        assert_eq!(graph.match_pattern(None, None, None).len(), graph.len());
        assert!(graph
            .match_pattern(Some("http://data.lblod.info/articles/zzz"), None, None)
            .is_empty());
    }

    #[test]
    fn test_empty_document() {
        assert!(GraphIndex::build(&Document::empty()).is_empty());
    }
}
