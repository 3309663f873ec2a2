//! Configuration constants and validation functions for the structure engine.

use regex::Regex;
use std::sync::LazyLock;

use crate::document::NodePath;
use crate::error::{Result, StructureError};

/// Base URI under which new resources are minted.
pub const RESOURCE_BASE_URL: &str = "http://data.lblod.info";

/// Resource base for titles.
pub const TITLE_RESOURCE_BASE: &str = "http://data.lblod.info/titles/";

/// Resource base for chapters.
pub const CHAPTER_RESOURCE_BASE: &str = "http://data.lblod.info/chapters/";

/// Resource base for sections.
pub const SECTION_RESOURCE_BASE: &str = "http://data.lblod.info/sections/";

/// Resource base for subsections.
pub const SUBSECTION_RESOURCE_BASE: &str = "http://data.lblod.info/subsections/";

/// Resource base for articles.
pub const ARTICLE_RESOURCE_BASE: &str = "http://data.lblod.info/articles/";

/// Highest ordinal expressible in classical Roman numerals.
pub const MAX_ROMAN: u32 = 3999;

/// Resource URI pattern: absolute http(s) URI without whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static RESOURCE_URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+(/[^\s]*)?$").expect("valid regex"));

/// Cursor pattern: child indices separated by '/'. Empty means the root.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CURSOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(/\d+)*)?$").expect("valid regex"));

/// Validate a resource URI.
///
/// # Examples
/// ```
/// use regelrecht_structure::config::validate_resource_uri;
///
/// assert!(validate_resource_uri("http://data.lblod.info/articles/1").is_ok());
/// assert!(validate_resource_uri("not a uri").is_err());
/// ```
pub fn validate_resource_uri(uri: &str) -> Result<()> {
    if RESOURCE_URI_PATTERN.is_match(uri) {
        Ok(())
    } else {
        Err(StructureError::InvalidResource(uri.to_string()))
    }
}

/// Parse a cursor given as child indices (`0/1/2`).
///
/// # Examples
/// ```
/// use regelrecht_structure::config::parse_cursor_path;
///
/// let path = parse_cursor_path("0/2/1").unwrap();
/// assert_eq!(path.indices(), &[0, 2, 1]);
/// assert!(parse_cursor_path("").unwrap().is_root());
/// assert!(parse_cursor_path("a/b").is_err());
/// ```
pub fn parse_cursor_path(cursor: &str) -> Result<NodePath> {
    let trimmed = cursor.trim().trim_matches('/');
    if !CURSOR_PATTERN.is_match(trimmed) {
        return Err(StructureError::InvalidCursor(cursor.to_string()));
    }
    if trimmed.is_empty() {
        return Ok(NodePath::root());
    }

    let indices = trimmed
        .split('/')
        .map(str::parse::<usize>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| StructureError::InvalidCursor(cursor.to_string()))?;
    Ok(NodePath::new(indices))
}
