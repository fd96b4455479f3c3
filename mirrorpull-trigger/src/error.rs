//! Error types for mirrorpull-trigger.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from queue scanning.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pull log directory does not exist.
    #[error("pull log directory not found at {path}")]
    QueueDirMissing { path: PathBuf },
}

/// Convenience constructor for [`TriggerError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> TriggerError {
    TriggerError::Io {
        path: path.into(),
        source,
    }
}
