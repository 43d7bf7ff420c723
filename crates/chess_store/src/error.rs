use std::path::PathBuf;

use chess_core::SnapshotError;
use thiserror::Error;

/// Any failure behind the repository boundary.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no saved game with id {0:?}")]
    NotFound(String),

    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode saved game {id:?}: {source}")]
    Decode {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode game: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("saved game {id:?} is not a valid position: {source}")]
    Snapshot {
        id: String,
        #[source]
        source: SnapshotError,
    },

    #[error("invalid store configuration: {0}")]
    Config(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}
