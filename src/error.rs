//! Error types for logging.properties parsing and merging.

use crate::group::SectionKind;
use std::path::PathBuf;
use thiserror::Error;

/// Model contract violations.
///
/// These are raised when two entries or groups with different identities are
/// asked to merge. Correct routing never produces them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Cannot merge entry '{found}' into entry '{expected}'")]
    EntryKeyMismatch { expected: String, found: String },

    #[error("Cannot merge group '{found}' into group '{expected}'")]
    GroupKeyMismatch { expected: String, found: String },

    #[error("Cannot merge {found} section into {expected} section")]
    SectionKindMismatch {
        expected: SectionKind,
        found: SectionKind,
    },
}

/// Errors surfaced by a merge run
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Contract violation: {0}")]
    Model(#[from] ModelError),

    #[error("Unrecognized line {line_number}: {line}")]
    UnrecognizedLine { line_number: usize, line: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for MergeError {
    fn from(err: config::ConfigError) -> Self {
        MergeError::ConfigError(err.to_string())
    }
}
