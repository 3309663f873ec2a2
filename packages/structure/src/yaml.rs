//! YAML reports of a document's structures and triples.

use serde::Serialize;

use crate::document::{Document, Node, NodePath};
use crate::error::Result;
use crate::graph::{Term, Triple};
use crate::structure::StructureRegistry;

/// Structure representation for the outline.
#[derive(Debug, Serialize)]
struct YamlStructure {
    #[serde(rename = "type")]
    structure_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
    path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    parts: Vec<YamlStructure>,
}

/// Triple representation for YAML serialization.
#[derive(Debug, Serialize)]
struct YamlTriple {
    subject: String,
    predicate: String,
    object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    datatype: Option<String>,
}

impl From<&Triple> for YamlTriple {
    fn from(t: &Triple) -> Self {
        let (object, datatype) = match &t.object {
            Term::Named(uri) => (uri.clone(), None),
            Term::Literal { value, datatype } => (value.clone(), Some(datatype.clone())),
        };
        Self {
            subject: t.subject.clone(),
            predicate: t.predicate.clone(),
            object,
            datatype,
        }
    }
}

/// Collect the registered structures below `node`, nested as in the tree.
fn collect_structures(
    node: &Node,
    path: &NodePath,
    registry: &StructureRegistry,
) -> Vec<YamlStructure> {
    let mut out = Vec::new();
    for (index, child) in node.children.iter().enumerate() {
        let child_path = path.child(index);
        match registry.spec_for_kind(child.kind) {
            Some(spec) => out.push(YamlStructure {
                structure_type: spec.name().to_string(),
                number: child.displayed_number().map(String::from),
                resource: child.resource().map(String::from),
                path: child_path.to_string(),
                parts: collect_structures(child, &child_path, registry),
            }),
            None => out.extend(collect_structures(child, &child_path, registry)),
        }
    }
    out
}

/// Serialize the structure outline of a document.
///
/// # Errors
/// Returns `Yaml` if serialization fails.
pub fn outline_to_yaml(doc: &Document, registry: &StructureRegistry) -> Result<String> {
    let outline = collect_structures(doc.root(), &NodePath::root(), registry);
    Ok(serde_yaml_ng::to_string(&outline)?)
}

/// Serialize triples in the given order.
///
/// # Errors
/// Returns `Yaml` if serialization fails.
pub fn triples_to_yaml<'a>(triples: impl IntoIterator<Item = &'a Triple>) -> Result<String> {
    let triples: Vec<YamlTriple> = triples.into_iter().map(YamlTriple::from).collect();
    Ok(serde_yaml_ng::to_string(&triples)?)
}
