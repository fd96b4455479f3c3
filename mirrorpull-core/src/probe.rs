//! Read-only directory classification.
//!
//! [`probe`] never mutates the filesystem; it only answers "what is this
//! path right now" so the reconciler can pick an action.

use std::path::Path;

use crate::command::run_git;
use crate::error::{io_err, PullError};
use crate::types::{DirState, RemoteUrl};

/// Whether `path` is a git working copy (has a `.git` directory).
pub fn is_git_repo(path: &Path) -> bool {
    path.join(".git").is_dir()
}

/// Configured `remote.origin.url` of the working copy at `repo_path`.
///
/// An unconfigured remote is reported as `None`, not an error — git exits
/// non-zero for a missing config key, so the query runs quiet.
pub fn remote_url(repo_path: &Path) -> Option<RemoteUrl> {
    run_git(
        ["config", "--get", "remote.origin.url"],
        Some(repo_path),
        true,
    )
    .ok()
    .filter(|url| !url.is_empty())
    .map(RemoteUrl)
}

/// Classify the target path.
///
/// Errors with [`PullError::NotADirectory`] when the path exists but is a
/// plain file; that is fatal for this target only.
pub fn probe(path: &Path) -> Result<DirState, PullError> {
    if !path.exists() {
        return Ok(DirState::Absent);
    }
    if !path.is_dir() {
        return Err(PullError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    if is_git_repo(path) {
        return Ok(DirState::Tracked {
            remote: remote_url(path),
        });
    }

    let mut entries = std::fs::read_dir(path).map_err(|e| io_err(path, e))?;
    if entries.next().is_some() {
        Ok(DirState::UntrackedNonEmpty)
    } else {
        Ok(DirState::UntrackedEmpty)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn absent_path() {
        let tmp = TempDir::new().unwrap();
        let state = probe(&tmp.path().join("nope")).unwrap();
        assert_eq!(state, DirState::Absent);
    }

    #[test]
    fn plain_file_is_not_a_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("marker");
        fs::write(&file, "x").unwrap();
        let err = probe(&file).expect_err("files are fatal");
        assert!(matches!(err, PullError::NotADirectory { .. }));
    }

    #[test]
    fn empty_directory() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(probe(tmp.path()).unwrap(), DirState::UntrackedEmpty);
    }

    #[test]
    fn populated_directory_without_metadata() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        assert_eq!(probe(tmp.path()).unwrap(), DirState::UntrackedNonEmpty);
    }

    #[test]
    fn initialized_repo_without_remote() {
        let tmp = TempDir::new().unwrap();
        run_git(["init"], Some(tmp.path()), false).unwrap();
        let state = probe(tmp.path()).unwrap();
        assert_eq!(state, DirState::Tracked { remote: None });
    }

    #[test]
    fn repo_with_configured_remote() {
        let tmp = TempDir::new().unwrap();
        run_git(["init"], Some(tmp.path()), false).unwrap();
        run_git(
            ["remote", "add", "origin", "https://example.org/5.git/"],
            Some(tmp.path()),
            false,
        )
        .unwrap();
        let state = probe(tmp.path()).unwrap();
        assert_eq!(
            state,
            DirState::Tracked {
                remote: Some(RemoteUrl::from("https://example.org/5.git/")),
            }
        );
    }
}
