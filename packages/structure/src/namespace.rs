//! RDF vocabulary helpers.
//!
//! A [`Resource`] knows both its full URI and its prefixed (CURIE) form so that
//! attribute values written either way compare equal.
//!
//! # Examples
//!
//! ```
//! use regelrecht_structure::namespace::{expand_prefixed, SAY};
//!
//! let has_part = SAY.term("hasPart");
//! assert_eq!(has_part.prefixed(), "say:hasPart");
//! assert!(has_part.matches("https://say.data.gift/ns/hasPart"));
//! assert_eq!(expand_prefixed("say:body"), "https://say.data.gift/ns/body");
//! ```

use std::fmt;

/// A vocabulary: base URI plus prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace {
    base: &'static str,
    prefix: &'static str,
}

impl Namespace {
    /// Create a namespace.
    #[must_use]
    pub const fn new(base: &'static str, prefix: &'static str) -> Self {
        Self { base, prefix }
    }

    /// Base URI of the vocabulary.
    #[must_use]
    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Prefix used in CURIEs.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Build a term of this vocabulary.
    #[must_use]
    pub fn term(&self, local: &str) -> Resource {
        Resource {
            full: format!("{}{local}", self.base),
            prefixed: format!("{}:{local}", self.prefix),
        }
    }
}

pub const SAY: Namespace = Namespace::new("https://say.data.gift/ns/", "say");
pub const ELI: Namespace = Namespace::new("http://data.europa.eu/eli/ontology#", "eli");
pub const EXT: Namespace = Namespace::new("http://mu.semte.ch/vocabularies/ext/", "ext");
pub const XSD: Namespace = Namespace::new("http://www.w3.org/2001/XMLSchema#", "xsd");
pub const RDF: Namespace = Namespace::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#", "rdf");
pub const BESLUIT: Namespace = Namespace::new("http://data.vlaanderen.be/ns/besluit#", "besluit");
pub const PROV: Namespace = Namespace::new("http://www.w3.org/ns/prov#", "prov");

/// All vocabularies known for prefix expansion.
pub const KNOWN_NAMESPACES: [Namespace; 7] = [SAY, ELI, EXT, XSD, RDF, BESLUIT, PROV];

/// A named RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    full: String,
    prefixed: String,
}

impl Resource {
    /// Full URI.
    #[must_use]
    pub fn full(&self) -> &str {
        &self.full
    }

    /// Prefixed form (e.g., `say:hasPart`).
    #[must_use]
    pub fn prefixed(&self) -> &str {
        &self.prefixed
    }

    /// Whether `value` is this resource, written full or prefixed.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.full == value || self.prefixed == value
    }

    /// Whether any whitespace-separated token of an attribute value matches.
    ///
    /// RDFa allows several predicates in one `property` attribute.
    #[must_use]
    pub fn matches_any(&self, attribute_value: &str) -> bool {
        attribute_value.split_whitespace().any(|v| self.matches(v))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// Expand a CURIE of a known vocabulary to its full URI.
///
/// Values that are already full URIs, or use an unknown prefix, are returned
/// unchanged.
#[must_use]
pub fn expand_prefixed(value: &str) -> String {
    for ns in KNOWN_NAMESPACES {
        if value.starts_with(ns.base) {
            return value.to_string();
        }
        if let Some(local) = value
            .strip_prefix(ns.prefix)
            .and_then(|rest| rest.strip_prefix(':'))
        {
            return format!("{}{local}", ns.base);
        }
    }
    value.to_string()
}
