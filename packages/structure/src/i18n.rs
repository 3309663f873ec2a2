//! Localization lookup used when constructing placeholder text.
//!
//! Lookups never fail: a missing key translates to the key itself.

use std::collections::HashMap;
use std::path::Path;

use serde_yaml_ng::Value;

use crate::error::Result;

/// Built-in Dutch (Flemish) translations.
const BUILTIN_NL_BE: &str = include_str!("../locales/nl-BE.yaml");

/// Translate a key to display text.
pub trait Translate {
    /// Look up `key`; unknown keys return the key.
    fn translate(&self, key: &str) -> String;
}

/// Translator that returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translate for KeyTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Translations loaded from a YAML document.
///
/// Nested maps are flattened with dots, so
/// `{placeholder: {article: {body: x}}}` provides `placeholder.article.body`.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    entries: HashMap<String, String>,
}

impl TranslationCatalog {
    /// Parse a catalog from YAML text.
    ///
    /// # Errors
    /// Returns `Yaml` when the text is not valid YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value = serde_yaml_ng::from_str(yaml)?;
        let mut entries = HashMap::new();
        flatten(&value, String::new(), &mut entries);
        Ok(Self { entries })
    }

    /// Load a catalog from a YAML file.
    ///
    /// # Errors
    /// Returns `Io` when the file cannot be read and `Yaml` when it is not
    /// valid YAML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml(&yaml)?;
        tracing::debug!(
            path = %path.display(),
            entries = catalog.len(),
            "Loaded translation catalog"
        );
        Ok(catalog)
    }

    /// The built-in `nl-BE` catalog.
    ///
    /// # Errors
    /// Returns `Yaml` if the bundled catalog is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_NL_BE)
    }

    /// Look up a key without falling back.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translate for TranslationCatalog {
    fn translate(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => {
                tracing::debug!(key = %key, "Missing translation, using key");
                key.to_string()
            }
        }
    }
}

fn flatten(value: &Value, prefix: String, out: &mut HashMap<String, String>) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = scalar_to_string(key) else {
                    continue;
                };
                let path = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(child, path, out);
            }
        }
        other => {
            if let Some(text) = scalar_to_string(other) {
                if !prefix.is_empty() {
                    out.insert(prefix, text);
                }
            }
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
