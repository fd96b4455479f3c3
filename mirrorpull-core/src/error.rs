//! Error types for mirrorpull-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while converging a target directory.
#[derive(Debug, Error)]
pub enum PullError {
    /// A git invocation exited non-zero.
    #[error("command `{command}` exited with {code}: {stderr}")]
    CommandFailed {
        /// Full command line, e.g. `git fetch --all`.
        command: String,
        /// Exit code, or -1 when the process was killed by a signal.
        code: i32,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The git process could not be started at all (binary missing, etc.).
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The target path exists but is not a directory. Fatal for this target
    /// only; other identifiers keep processing.
    #[error("{path} exists but is not a directory")]
    NotADirectory { path: PathBuf },

    /// Underlying I/O failure, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`PullError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PullError {
    PullError::Io {
        path: path.into(),
        source,
    }
}
