//! Error types for lexdiv-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a dataset.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// The dataset root directory does not exist.
    #[error("dataset directory not found: {0}")]
    MissingRoot(Utf8PathBuf),

    /// A dataset file or directory could not be read.
    #[error("failed to read {path}")]
    Io {
        /// Path that failed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory entry name was not valid UTF-8.
    #[error("non UTF-8 path under {0}")]
    NonUtf8Path(Utf8PathBuf),

    /// A JSON dataset file could not be parsed.
    #[error("malformed JSON in {path}")]
    Json {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using [`CorpusError`].
pub type CorpusResult<T> = Result<T, CorpusError>;
