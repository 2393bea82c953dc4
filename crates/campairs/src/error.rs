use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around pair generation: resolving and reading name sources,
/// and writing or re-reading pair files.
///
/// Malformed image names are not errors; they are skipped and reported
/// through [`crate::Diagnostics`].
#[derive(Debug, Error)]
pub enum PairsError {
    #[error("provide either a list of images or a feature file")]
    MissingInputSource,

    #[error("failed to read {path}: {source}")]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed feature store {path}: {source}")]
    MalformedFeatureStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("feature store {path} must have an object at its root")]
    FeatureStoreRoot { path: PathBuf },

    #[error("{path}:{line}: expected two image names, got '{content}'")]
    MalformedPairLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PairsError>;
