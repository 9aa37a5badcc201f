//! Core library for lexdiv.
//!
//! Syllable-level lexical diversity for Portuguese text: a heuristic
//! syllabifier, type-token ratios over syllables or words, and dataset
//! adapters for scoring whole corpora.
//!
//! # Modules
//!
//! - [`tokenize`] - Word extraction (strict and loose modes)
//! - [`syllable`] - Vowel/semivowel classification and syllable splitting
//! - [`diversity`] - Syllabic and lexical type-token ratios
//! - [`corpus`] - Dataset extraction, natural ordering, per-item scoring
//! - [`stats`] - Mean and standard deviation over ratios
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lexdiv_core::{lexical_ttr, syllabic_ttr};
//!
//! let text = "O gato caça o rato e o gato caça outra vez";
//! assert_eq!(syllabic_ttr(text), 8.0 / 13.0);
//! assert_eq!(lexical_ttr(text), 7.0 / 11.0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod corpus;
pub mod diversity;
pub mod error;
pub mod stats;
pub mod syllable;
pub mod tokenize;

pub use config::{Config, ConfigLoader, ConfigSources, DatasetConfig, LogLevel};
pub use corpus::{CorpusFormat, CorpusItem, CorpusReport, Extractor, load_corpus, score_items};
pub use diversity::{DiversityReport, Metric, lexical_ttr, syllabic_ttr};
pub use error::{ConfigError, ConfigResult, CorpusError, CorpusResult};
pub use stats::Summary;
pub use syllable::syllabify;
pub use tokenize::{TokenizeMode, tokenize};

/// Default maximum input size for single-file scoring (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
