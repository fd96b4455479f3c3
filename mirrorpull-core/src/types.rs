//! Domain types for the reconciliation engine.
//!
//! All path parameters elsewhere in the crate use `&Path`/`PathBuf`; never
//! `&str` or `String` for filesystem paths.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed remote repository address.
///
/// Opaque to the engine: two remotes are "the same" exactly when their
/// strings compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteUrl(pub String);

impl fmt::Display for RemoteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RemoteUrl {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RemoteUrl {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed numeric repository identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RepoId(pub u64);

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for RepoId {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Classification of a target directory, as reported by [`crate::probe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirState {
    /// The path does not exist.
    Absent,
    /// A directory with no version-control metadata and no entries.
    UntrackedEmpty,
    /// A directory with no version-control metadata and at least one entry.
    UntrackedNonEmpty,
    /// A git working copy; `remote` is its configured origin URL, if any.
    Tracked { remote: Option<RemoteUrl> },
}

/// Terminal result of one reconciliation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A fresh working copy was materialized at the target.
    Cloned,
    /// An existing working copy was fast-forwarded and cleaned.
    Pulled,
    /// A populated plain directory was brought under version control.
    HistoryAdopted,
    /// The target is bound to a different remote; nothing was touched.
    RejectedRemoteMismatch,
    /// A git invocation failed; the attempt was abandoned.
    Failed,
}

impl Outcome {
    /// Whether downstream consumers should be signaled for this outcome.
    ///
    /// Mismatch and failure both mean "do not signal", but they are logged
    /// distinctly (warning vs. error).
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::Cloned | Outcome::Pulled | Outcome::HistoryAdopted
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Cloned => write!(f, "cloned"),
            Outcome::Pulled => write!(f, "pulled"),
            Outcome::HistoryAdopted => write!(f, "history-adopted"),
            Outcome::RejectedRemoteMismatch => write!(f, "rejected-remote-mismatch"),
            Outcome::Failed => write!(f, "failed"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
