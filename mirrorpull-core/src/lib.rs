//! # mirrorpull-core
//!
//! Directory-reconciliation engine: converge a local directory onto the
//! latest content of a git remote, without destroying unrelated trees.
//!
//! Call [`Reconciler::reconcile`] with a remote URL and a target path; the
//! engine probes the directory, picks one of four actions (clone, pull,
//! history adoption, reject), and reports an [`Outcome`].
//!
//! - [`types`] — newtypes, [`DirState`], [`Outcome`]
//! - [`error`] — [`PullError`]
//! - [`command`] — the `git` subprocess executor
//! - [`probe`] — read-only directory classification
//! - [`reconcile`] — the decision state machine
//! - [`adopt`] — bring a populated plain directory under version control

pub mod adopt;
pub mod command;
pub mod error;
pub mod probe;
pub mod reconcile;
pub mod types;

pub use error::PullError;
pub use reconcile::Reconciler;
pub use types::{DirState, Outcome, RemoteUrl, RepoId};
