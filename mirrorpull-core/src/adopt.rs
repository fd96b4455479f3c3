//! History adoption — bring a populated plain directory under version
//! control as a mirror of a remote, in place.
//!
//! The remote may be large, so deleting the directory and re-cloning is not
//! an option. Instead the remote's history is grafted onto the existing
//! tree.
//!
//! ## 7-step protocol, strictly ordered
//!
//! 1. `git init` if there is no working-copy metadata (existing files are
//!    untouched by this step).
//! 2. Remote guard: register `remote` as origin if none is configured;
//!    abort with `RejectedRemoteMismatch` if a different one already is.
//!    This check runs before any destructive step.
//! 3. `git fetch --all` — history into metadata, no file-tree changes yet.
//! 4. `git checkout -f origin/<primary>` — the remote snapshot overwrites
//!    any existing file on an overlapping path; the remote always wins.
//! 5. `git switch <primary>` — make the primary branch the active branch.
//! 6. `git clean -fdx` — delete everything (files, directories, ignored
//!    entries) the remote snapshot does not define.
//! 7. `git restore .` — modified tracked files back to committed content.
//!
//! Each step's failure aborts the remainder. Re-running with the same
//! remote degenerates to a no-op fetch/checkout cycle, so the procedure is
//! idempotent.

use std::path::Path;

use crate::command::run_git;
use crate::error::{io_err, PullError};
use crate::probe::{is_git_repo, remote_url};
use crate::types::{Outcome, RemoteUrl};

/// Adopt the history of `remote` into the directory at `target`.
///
/// Returns [`Outcome::HistoryAdopted`] on success and
/// [`Outcome::RejectedRemoteMismatch`] when the directory is already bound
/// to a different remote; any git failure surfaces as an error for the
/// caller to contain.
pub fn adopt_history(
    remote: &RemoteUrl,
    target: &Path,
    primary_branch: &str,
) -> Result<Outcome, PullError> {
    if !target.exists() {
        tracing::info!("creating target directory {}", target.display());
        std::fs::create_dir_all(target).map_err(|e| io_err(target, e))?;
    }

    if !is_git_repo(target) {
        tracing::info!("initializing a new working copy in {}", target.display());
        run_git(["init"], Some(target), false)?;
    }

    match remote_url(target) {
        None => {
            tracing::info!("registering remote origin {remote}");
            run_git(
                ["remote", "add", "origin", remote.0.as_str()],
                Some(target),
                false,
            )?;
        }
        Some(current) if current != *remote => {
            tracing::warn!(
                "remote mismatch in {} (current: {current}, requested: {remote}); \
                 refusing to adopt",
                target.display()
            );
            return Ok(Outcome::RejectedRemoteMismatch);
        }
        Some(_) => {}
    }

    tracing::info!("fetching history from {remote}");
    run_git(["fetch", "--all"], Some(target), false)?;

    tracing::info!("checking out files, overwriting overlapping paths");
    let origin_ref = format!("origin/{primary_branch}");
    run_git(["checkout", "-f", origin_ref.as_str()], Some(target), false)?;

    tracing::info!("switching to branch {primary_branch}");
    run_git(["switch", primary_branch], Some(target), false)?;

    tracing::info!("removing files not in the remote snapshot");
    run_git(["clean", "-fdx"], Some(target), false)?;

    tracing::info!("restoring modified tracked files");
    run_git(["restore", "."], Some(target), false)?;

    tracing::info!("history adopted into {}", target.display());
    Ok(Outcome::HistoryAdopted)
}
