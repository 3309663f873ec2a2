//! Triples and their terms.

use std::fmt;

use crate::namespace::XSD;

/// Object of a triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A resource URI.
    Named(String),

    /// A typed literal.
    Literal { value: String, datatype: String },
}

impl Term {
    /// A named node.
    #[must_use]
    pub fn named(uri: impl Into<String>) -> Self {
        Self::Named(uri.into())
    }

    /// An `xsd:string` literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal {
            value: value.into(),
            datatype: XSD.term("string").full().to_string(),
        }
    }

    /// The URI or literal value.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Named(uri) => uri,
            Self::Literal { value, .. } => value,
        }
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(uri) => write!(f, "<{uri}>"),
            Self::Literal { value, datatype } => write!(f, "\"{value}\"^^<{datatype}>"),
        }
    }
}

/// A `(subject, predicate, object)` statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject URI.
    pub subject: String,

    /// Predicate URI (always expanded).
    pub predicate: String,

    /// Object.
    pub object: Term,
}

impl Triple {
    #[must_use]
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> <{}> {} .", self.subject, self.predicate, self.object)
    }
}
