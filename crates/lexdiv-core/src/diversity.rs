//! Type-token ratios over syllables and words.
//!
//! The syllabic ratio pools syllables across the whole text rather than
//! averaging per word: every syllable of every word counts toward one
//! denominator.

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllable;
use crate::tokenize::{TokenizeMode, tokenize};

/// Which diversity ratio to compute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Metric {
    /// Distinct syllables over total syllables (strict tokenization).
    #[default]
    Syllabic,
    /// Distinct words over total words (loose tokenization).
    Lexical,
}

impl Metric {
    /// Returns the metric name as used in config files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Syllabic => "syllabic",
            Self::Lexical => "lexical",
        }
    }

    /// Tokenization mode this metric extracts words with.
    pub const fn tokenize_mode(&self) -> TokenizeMode {
        match self {
            Self::Syllabic => TokenizeMode::Strict,
            Self::Lexical => TokenizeMode::Loose,
        }
    }

    /// Compute the ratio for `text`.
    pub fn score(&self, text: &str) -> f64 {
        self.report(text).ratio
    }

    /// Compute the ratio for `text` along with the counts behind it.
    #[tracing::instrument(skip(text), fields(text_len = text.len()))]
    pub fn report(&self, text: &str) -> DiversityReport {
        let words = tokenize(text, self.tokenize_mode());
        let (units, distinct_units) = match self {
            Self::Syllabic => count_units(words.iter().flat_map(|w| syllable::syllabify(w))),
            Self::Lexical => count_units(words.iter().map(String::as_str)),
        };
        DiversityReport {
            metric: *self,
            words: words.len(),
            units,
            distinct_units,
            ratio: type_token_ratio(units, distinct_units),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiversityReport {
    /// Metric that produced this report.
    pub metric: Metric,
    /// Number of words extracted.
    pub words: usize,
    /// Number of counted units (syllables or words).
    pub units: usize,
    /// Number of distinct units.
    pub distinct_units: usize,
    /// `distinct_units / units`, or 0.0 when there are no units.
    pub ratio: f64,
}

/// Total and distinct counts of `units`.
fn count_units<'a>(units: impl IntoIterator<Item = &'a str>) -> (usize, usize) {
    let mut seen = HashSet::new();
    let mut total = 0;
    for unit in units {
        total += 1;
        seen.insert(unit);
    }
    (total, seen.len())
}

/// Distinct units over total units; 0.0 when there are none.
const fn type_token_ratio(total: usize, distinct: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        distinct as f64 / total as f64
    }
}

/// Syllable-level type-token ratio of `text`.
///
/// ```
/// use lexdiv_core::syllabic_ttr;
///
/// assert_eq!(syllabic_ttr(""), 0.0);
/// assert_eq!(syllabic_ttr("casa"), 1.0);
/// ```
pub fn syllabic_ttr(text: &str) -> f64 {
    Metric::Syllabic.score(text)
}

/// Word-level type-token ratio of `text`.
pub fn lexical_ttr(text: &str) -> f64 {
    Metric::Lexical.score(text)
}
