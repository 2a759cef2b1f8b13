//! Error type for the fallible edges of the crate
//!
//! The simulation itself never fails; only file IO, tape parsing and replay
//! verification can.

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::FrameSnapshot;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported tape version {found} (expected {expected})")]
    UnsupportedTapeVersion { found: u32, expected: u32 },

    #[error("replay diverged: expected {expected:?}, got {actual:?}")]
    ReplayDiverged {
        expected: Box<FrameSnapshot>,
        actual: Box<FrameSnapshot>,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
