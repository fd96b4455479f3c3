//! Process configuration, resolved once at startup.
//!
//! # Environment mapping
//!
//! ```text
//! PUBLIC            → <PUBLIC>/files            (files_root)
//! PRIVATE           → <PRIVATE>/logs/dopull     (pull_log_dir)
//!                     <PRIVATE>/logs/dopush     (push_log_dir)
//! UPSTREAM_REPO_DIR → upstream_base (default https://github.com/gutenbergbooks/)
//! ```
//!
//! The scan loop takes a `&Config` explicitly; nothing below this module
//! reads the environment. Tests build configs with [`Config::new`] against
//! temp directories and never touch process env.

use std::path::PathBuf;

use mirrorpull_core::reconcile::DEFAULT_PRIMARY_BRANCH;
use mirrorpull_core::types::{RemoteUrl, RepoId};

/// Default template base for deriving remote addresses from identifiers.
pub const DEFAULT_UPSTREAM_BASE: &str = "https://github.com/gutenbergbooks/";

/// Resolved paths and remote template for one process run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root under which each repository syncs to `<files_root>/<id>`.
    pub files_root: PathBuf,
    /// Directory scanned for `<id>.zip.trig` markers.
    pub pull_log_dir: PathBuf,
    /// Directory markers are relocated to after a successful sync.
    pub push_log_dir: PathBuf,
    /// Template base; the remote for id N is `<upstream_base>N.git/`.
    pub upstream_base: String,
    /// Primary branch name for history adoption.
    pub primary_branch: String,
}

impl Config {
    /// Build a config from explicit parts. The upstream base gets a
    /// trailing slash if it lacks one, so template substitution can always
    /// append `<id>.git/`.
    pub fn new(
        files_root: impl Into<PathBuf>,
        pull_log_dir: impl Into<PathBuf>,
        push_log_dir: impl Into<PathBuf>,
        upstream_base: impl Into<String>,
    ) -> Self {
        let mut upstream_base = upstream_base.into();
        if !upstream_base.ends_with('/') {
            upstream_base.push('/');
        }
        Self {
            files_root: files_root.into(),
            pull_log_dir: pull_log_dir.into(),
            push_log_dir: push_log_dir.into(),
            upstream_base,
            primary_branch: DEFAULT_PRIMARY_BRANCH.to_owned(),
        }
    }

    /// Resolve the config from `PUBLIC`, `PRIVATE`, and `UPSTREAM_REPO_DIR`.
    ///
    /// Unset variables fall back to empty roots (relative to the working
    /// directory) and the default upstream base, matching the operational
    /// layout on the hosting side.
    pub fn from_env() -> Self {
        let public = PathBuf::from(std::env::var("PUBLIC").unwrap_or_default());
        let private = PathBuf::from(std::env::var("PRIVATE").unwrap_or_default());
        let upstream_base =
            std::env::var("UPSTREAM_REPO_DIR").unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_owned());

        Self::new(
            public.join("files"),
            private.join("logs").join("dopull"),
            private.join("logs").join("dopush"),
            upstream_base,
        )
    }

    /// Derive the remote address for an identifier by substituting it into
    /// the template base.
    pub fn remote_for(&self, id: RepoId) -> RemoteUrl {
        remote_for_id(&self.upstream_base, id)
    }

    /// Target directory for an identifier: `<files_root>/<id>`.
    pub fn target_for(&self, id: RepoId) -> PathBuf {
        self.files_root.join(id.to_string())
    }

    /// Marker destination after a successful sync.
    pub fn push_marker_path(&self, marker_name: &str) -> PathBuf {
        self.push_log_dir.join(marker_name)
    }

    /// Marker source location in the scanned queue.
    pub fn pull_marker_path(&self, marker_name: &str) -> PathBuf {
        self.pull_log_dir.join(marker_name)
    }
}

/// `<base><id>.git/`, with a trailing slash added to `base` if missing.
///
/// Shared by [`Config::remote_for`] and callers that carry a bare template
/// base instead of a full config (the single-identifier CLI path).
pub fn remote_for_id(base: &str, id: RepoId) -> RemoteUrl {
    let sep = if base.ends_with('/') { "" } else { "/" };
    RemoteUrl(format!("{base}{sep}{id}.git/"))
}
