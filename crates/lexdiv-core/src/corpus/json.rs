//! Flat directories of JSON files holding one or more command texts.
//!
//! Accepted shapes, tried in order:
//! 1. an object with an object under the configured field: its values;
//! 2. an object whose values are all strings: its values;
//! 3. an array: its elements.
//!
//! Anything else contributes no items.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;

use super::{CorpusItem, Extractor, read_to_string, sorted_entries};
use crate::error::{CorpusError, CorpusResult};

/// Field holding the command mapping by default.
pub const DEFAULT_FIELD: &str = "comando_tematico";

/// Extracts string entries from `<root>/*.json`.
#[derive(Debug, Clone)]
pub struct JsonExtractor {
    field: String,
}

impl JsonExtractor {
    /// Use `field` as the nested command mapping key.
    pub fn new<S: Into<String>>(field: S) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Candidate texts of a parsed document, in document order.
    ///
    /// Entries are not yet filtered; non-strings are kept so that labels
    /// index the original positions.
    pub fn entries<'a>(&self, value: &'a Value) -> Vec<&'a Value> {
        match value {
            Value::Object(map) => match map.get(&self.field) {
                Some(Value::Object(nested)) => nested.values().collect(),
                _ if map.values().all(Value::is_string) => map.values().collect(),
                _ => Vec::new(),
            },
            Value::Array(items) => items.iter().collect(),
            _ => Vec::new(),
        }
    }
}

impl Default for JsonExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_FIELD)
    }
}

impl Extractor for JsonExtractor {
    fn candidates(&self, root: &Utf8Path) -> CorpusResult<Vec<Utf8PathBuf>> {
        Ok(sorted_entries(root)?
            .into_iter()
            .filter(|path| path.as_str().ends_with(".json") && path.is_file())
            .collect())
    }

    fn extract(&self, path: &Utf8Path) -> CorpusResult<Vec<CorpusItem>> {
        let content = read_to_string(path)?;
        let value: Value = serde_json::from_str(&content).map_err(|source| CorpusError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path.file_name().unwrap_or(path.as_str());

        Ok(self
            .entries(&value)
            .into_iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let text = entry.as_str()?.trim();
                (!text.is_empty()).then(|| CorpusItem::new(format!("{file_name}#{i}"), text))
            })
            .collect())
    }
}
