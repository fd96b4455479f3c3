//! `mirrorpull pull` — sync a single numbered directory.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use mirrorpull_core::reconcile::DEFAULT_PRIMARY_BRANCH;
use mirrorpull_core::types::RepoId;
use mirrorpull_core::Reconciler;
use mirrorpull_trigger::config::{remote_for_id, DEFAULT_UPSTREAM_BASE};

/// Arguments for `mirrorpull pull`.
#[derive(Args, Debug)]
pub struct PullArgs {
    /// Numeric identifier of the repository to sync.
    pub id: u64,

    /// Existing root directory; content lands in `<root>/<id>`.
    pub root: PathBuf,

    /// Upstream template base; the remote is `<base><id>.git/`.
    #[arg(long, default_value = DEFAULT_UPSTREAM_BASE)]
    pub upstream: String,

    /// Primary branch name used during history adoption.
    #[arg(long, default_value = DEFAULT_PRIMARY_BRANCH)]
    pub branch: String,
}

impl PullArgs {
    pub fn run(self) -> Result<()> {
        if !self.root.is_dir() {
            bail!("{} does not exist or is not a directory", self.root.display());
        }

        let id = RepoId(self.id);
        let remote = remote_for_id(&self.upstream, id);
        let target = self.root.join(id.to_string());
        tracing::info!("pulling from {remote} to {}", target.display());

        let outcome = Reconciler::new(self.branch).reconcile(&remote, &target);
        println!("{id}: {outcome}");
        if !outcome.is_success() {
            bail!("update of {id} did not succeed ({outcome})");
        }
        Ok(())
    }
}
