//! The reconciliation state machine.
//!
//! Decision table (probed state → action):
//!
//! | state | action |
//! |---|---|
//! | `Absent` | clone |
//! | `UntrackedEmpty` | clone into the existing directory |
//! | `UntrackedNonEmpty` | history adoption |
//! | `Tracked`, bound remote matches | pull + clean + restore |
//! | `Tracked`, bound remote differs | reject, touch nothing |
//! | `Tracked`, no bound remote | history adoption (registers the remote) |
//!
//! The mismatch guard always runs before any destructive step (forced
//! checkout, recursive clean). A tracked directory bound to a different
//! remote is never mutated.

use std::path::Path;

use crate::adopt::adopt_history;
use crate::command::run_git;
use crate::error::PullError;
use crate::probe::probe;
use crate::types::{DirState, Outcome, RemoteUrl};

/// The default primary branch name, used when none is configured.
pub const DEFAULT_PRIMARY_BRANCH: &str = "main";

/// Converges target directories onto git remotes.
///
/// Repositories whose history is not rooted in a conventional primary
/// branch are unsupported; `primary_branch` names that branch.
#[derive(Debug, Clone)]
pub struct Reconciler {
    pub primary_branch: String,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self {
            primary_branch: DEFAULT_PRIMARY_BRANCH.to_owned(),
        }
    }
}

impl Reconciler {
    pub fn new(primary_branch: impl Into<String>) -> Self {
        Self {
            primary_branch: primary_branch.into(),
        }
    }

    /// Converge `target` onto the latest content of `remote`.
    ///
    /// Never panics and never returns an error: every failure is contained
    /// as [`Outcome::Failed`] so the caller can keep processing other
    /// identifiers independently.
    pub fn reconcile(&self, remote: &RemoteUrl, target: &Path) -> Outcome {
        let state = match probe(target) {
            Ok(state) => state,
            Err(err) => {
                tracing::error!("cannot probe {}: {err}", target.display());
                return Outcome::Failed;
            }
        };

        match state {
            DirState::Absent | DirState::UntrackedEmpty => {
                match clone_repo(remote, target) {
                    Ok(()) => Outcome::Cloned,
                    Err(err) => {
                        tracing::error!("clone of {remote} into {} failed: {err}", target.display());
                        Outcome::Failed
                    }
                }
            }
            DirState::UntrackedNonEmpty => {
                match adopt_history(remote, target, &self.primary_branch) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        tracing::error!(
                            "history adoption of {} from {remote} failed: {err}",
                            target.display()
                        );
                        Outcome::Failed
                    }
                }
            }
            DirState::Tracked { remote: Some(bound) } if bound == *remote => {
                match pull_repo(target) {
                    Ok(()) => Outcome::Pulled,
                    Err(err) => {
                        tracing::error!("pull of {} failed: {err}", target.display());
                        Outcome::Failed
                    }
                }
            }
            DirState::Tracked { remote: Some(bound) } => {
                tracing::warn!(
                    "{} is bound to a different remote; skipping update \
                     (current: {bound}, requested: {remote})",
                    target.display()
                );
                Outcome::RejectedRemoteMismatch
            }
            DirState::Tracked { remote: None } => {
                // A working copy with no origin, e.g. an adoption that was
                // interrupted after `git init`. Adoption registers the
                // requested remote and converges.
                match adopt_history(remote, target, &self.primary_branch) {
                    Ok(outcome) => outcome,
                    Err(err) => {
                        tracing::error!(
                            "history adoption of {} from {remote} failed: {err}",
                            target.display()
                        );
                        Outcome::Failed
                    }
                }
            }
        }
    }
}

/// Materialize a fresh working copy at `target`.
///
/// Also used for an existing empty directory; git clones into it in place.
fn clone_repo(remote: &RemoteUrl, target: &Path) -> Result<(), PullError> {
    tracing::info!("cloning {remote} into {}", target.display());
    let target_str = target.to_string_lossy();
    run_git(["clone", remote.0.as_str(), target_str.as_ref()], None, false)?;
    tracing::info!("clone complete: {}", target.display());
    Ok(())
}

/// Fast-forward an existing working copy and make its tree byte-identical
/// to the remote snapshot.
///
/// Strictly ordered: the clean runs after the history update so files newly
/// absent upstream (and directories the update emptied) are removed too;
/// the restore runs last so locally modified tracked files end up at their
/// committed content.
fn pull_repo(target: &Path) -> Result<(), PullError> {
    tracing::info!("pulling latest changes in {}", target.display());
    run_git(["pull"], Some(target), false)?;
    run_git(["clean", "-fdx"], Some(target), false)?;
    run_git(["restore", "."], Some(target), false)?;
    tracing::info!("working copy updated: {}", target.display());
    Ok(())
}
