//! Dataset loading and per-item scoring.
//!
//! A dataset is a directory. An [`Extractor`] decides which entries of that
//! directory are inputs and how text items are pulled out of each one.
//! Loading never stops at a bad input: unreadable or malformed entries are
//! logged and skipped, so statistics always come from the valid subset.

pub mod json;
pub mod natural;
pub mod xml;

use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diversity::Metric;
use crate::error::{CorpusError, CorpusResult};
use crate::stats::Summary;

pub use json::JsonExtractor;
pub use natural::natural_cmp;
pub use xml::XmlBodyExtractor;

/// One text to score, with a label identifying where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusItem {
    /// Directory name, file name, or `file#index`.
    pub label: String,
    /// Text to score.
    pub text: String,
}

impl CorpusItem {
    /// Create an item.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Strategy for one dataset shape.
pub trait Extractor {
    /// Inputs under `root`, in natural order.
    fn candidates(&self, root: &Utf8Path) -> CorpusResult<Vec<Utf8PathBuf>>;

    /// Text items held by one input.
    fn extract(&self, path: &Utf8Path) -> CorpusResult<Vec<CorpusItem>>;
}

/// Dataset shapes selectable from config and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum CorpusFormat {
    /// One subdirectory per item, each with an XML-like file holding `<body>`.
    Xml,
    /// JSON files holding command mappings or arrays.
    Json,
}

impl CorpusFormat {
    /// Returns the format name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Json => "json",
        }
    }

    /// Build the extractor for this format.
    ///
    /// `file_name` applies to [`CorpusFormat::Xml`] and `field` to
    /// [`CorpusFormat::Json`]; `None` selects the built-in default.
    pub fn extractor(&self, file_name: Option<&str>, field: Option<&str>) -> Box<dyn Extractor> {
        match self {
            Self::Xml => Box::new(
                file_name.map_or_else(XmlBodyExtractor::default, XmlBodyExtractor::new),
            ),
            Self::Json => Box::new(field.map_or_else(JsonExtractor::default, JsonExtractor::new)),
        }
    }
}

impl std::fmt::Display for CorpusFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entries of `dir`, sorted naturally by file name.
pub(crate) fn sorted_entries(dir: &Utf8Path) -> CorpusResult<Vec<Utf8PathBuf>> {
    let io_err = |source: std::io::Error| CorpusError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = Vec::new();
    for entry in dir.as_std_path().read_dir().map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let path =
            Utf8PathBuf::from_path_buf(path).map_err(|_| CorpusError::NonUtf8Path(dir.to_path_buf()))?;
        entries.push(path);
    }
    entries.sort_by(|a, b| natural_cmp(a.file_name().unwrap_or(""), b.file_name().unwrap_or("")));
    Ok(entries)
}

pub(crate) fn read_to_string(path: &Utf8Path) -> CorpusResult<String> {
    std::fs::read_to_string(path.as_std_path()).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every item of the dataset at `root`.
///
/// Only a missing or unlistable root is an error. Inputs that fail to
/// extract are logged at `debug` and skipped.
#[tracing::instrument(skip_all, fields(root = %root))]
pub fn load_corpus(root: &Utf8Path, extractor: &dyn Extractor) -> CorpusResult<Vec<CorpusItem>> {
    if !root.is_dir() {
        return Err(CorpusError::MissingRoot(root.to_path_buf()));
    }

    let candidates = extractor.candidates(root)?;
    let mut items = Vec::new();
    for path in &candidates {
        match extractor.extract(path) {
            Ok(found) => items.extend(found),
            Err(err) => tracing::debug!(path = %path, error = %err, "skipping input"),
        }
    }
    tracing::debug!(
        inputs = candidates.len(),
        items = items.len(),
        "dataset loaded"
    );
    Ok(items)
}

/// Ratio of one corpus item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoredItem {
    /// Item label.
    pub label: String,
    /// Diversity ratio, always greater than zero.
    pub ratio: f64,
}

/// Scores of one dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CorpusReport {
    /// Dataset name.
    pub name: String,
    /// Metric used for every item.
    pub metric: Metric,
    /// Items that produced a positive ratio, in load order.
    pub items: Vec<ScoredItem>,
    /// Statistics over `items`; absent when no item scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

impl CorpusReport {
    /// Report for a dataset with nothing to score.
    pub fn empty(name: impl Into<String>, metric: Metric) -> Self {
        Self {
            name: name.into(),
            metric,
            items: Vec::new(),
            summary: None,
        }
    }
}

/// Score `items` with `metric`.
///
/// Items whose ratio is not positive (no countable units) are left out of
/// the report and its statistics rather than counted as zero.
#[tracing::instrument(skip_all, fields(name = %name, items = items.len(), metric = %metric))]
pub fn score_items(name: &str, items: &[CorpusItem], metric: Metric) -> CorpusReport {
    let scored: Vec<ScoredItem> = items
        .iter()
        .filter_map(|item| {
            let ratio = metric.score(&item.text);
            (ratio > 0.0).then(|| ScoredItem {
                label: item.label.clone(),
                ratio,
            })
        })
        .collect();

    let ratios: Vec<f64> = scored.iter().map(|s| s.ratio).collect();
    CorpusReport {
        name: name.to_string(),
        metric,
        summary: Summary::from_ratios(&ratios),
        items: scored,
    }
}
