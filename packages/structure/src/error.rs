//! Error types for the structure engine.
//!
//! Failures that are part of normal editing (no valid insertion point, no
//! sibling to swap with) are reported as `None` by the commands. The variants
//! below cover the cases a caller must be told about.

use thiserror::Error;

/// Main error type for the structure library.
#[derive(Debug, Error)]
pub enum StructureError {
    /// Structure type not present in the registry.
    #[error("Unsupported structure type: '{0}'")]
    UnknownStructure(String),

    /// Markup element that does not map to a node kind.
    #[error("Unknown node kind <{tag_name}>{}", .context.as_ref().map(|c| format!(" in {c}")).unwrap_or_default())]
    UnknownNodeKind {
        tag_name: String,
        context: Option<String>,
    },

    /// Missing required markup attribute.
    #[error("Missing required attribute '{attribute}' on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Two nodes claim the same semantic identity.
    #[error("Duplicate resource in document: {0}")]
    DuplicateResource(String),

    /// Path does not point at a node of the document.
    #[error("Invalid node path: {0}")]
    InvalidPath(String),

    /// Cursor string could not be parsed.
    #[error("Invalid cursor '{0}'. Expected child indices separated by '/' (e.g., 0/1/2)")]
    InvalidCursor(String),

    /// Resource URI not syntactically valid.
    #[error("Invalid resource URI: '{0}'")]
    InvalidResource(String),

    /// No node carries the requested resource.
    #[error("No node with resource {0}")]
    ResourceNotFound(String),

    /// A transaction step could not be applied.
    #[error("Step {index} failed: {reason}")]
    StepFailed { index: usize, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for structure operations.
pub type Result<T> = std::result::Result<T, StructureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StructureError::UnknownStructure("paragraaf".to_string());
        assert!(err.to_string().contains("paragraaf"));
        assert!(err.to_string().starts_with("Unsupported structure type"));
    }

    #[test]
    fn test_unknown_kind_with_context() {
        let err = StructureError::UnknownNodeKind {
            tag_name: "foo".to_string(),
            context: Some("<article_body>".to_string()),
        };
        assert_eq!(err.to_string(), "Unknown node kind <foo> in <article_body>");
    }

    #[test]
    fn test_unknown_kind_without_context() {
        let err = StructureError::UnknownNodeKind {
            tag_name: "foo".to_string(),
            context: None,
        };
        assert_eq!(err.to_string(), "Unknown node kind <foo>");
    }

    #[test]
    fn test_step_failed_display() {
        let err = StructureError::StepFailed {
            index: 2,
            reason: "no header".to_string(),
        };
        assert_eq!(err.to_string(), "Step 2 failed: no header");
    }
}
