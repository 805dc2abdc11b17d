//! Error taxonomy for the drift checker.
//!
//! Only load-time structural problems with the canonical config (and plain
//! I/O failures) are errors. A pattern that fails to match, a drifted value,
//! or an absent program source are all reportable outcomes, not errors.

use std::path::PathBuf;

/// Drift checker errors. All variants are fatal: without an intact source of
/// truth no comparison is meaningful, so the run aborts instead of producing
/// a partial report.
#[derive(Debug, thiserror::Error)]
pub enum DriftError {
    #[error("failed to read canonical config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse canonical config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("canonical config is missing the [{table}] table")]
    MissingTable { table: String },

    #[error("canonical entry {name} is not a string")]
    NonStringEntry { name: String },

    #[error("no canonical entry for logical name {0}")]
    UnknownLogicalName(String),

    #[error("failed to read artifact {path}: {source}")]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    ReportWrite(#[from] std::io::Error),
}

/// Result type for drift checker operations.
pub type Result<T> = std::result::Result<T, DriftError>;
