//! Queue scan: find trigger markers, reconcile, relocate.
//!
//! A marker is a plain file named `<digits>.zip.trig`. Entries are
//! processed in name order, one at a time; a failing identifier never
//! stops the scan (its marker stays in place for the next run).

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use mirrorpull_core::types::{Outcome, RepoId};
use mirrorpull_core::Reconciler;

use crate::config::Config;
use crate::error::{io_err, TriggerError};

/// Filename suffix that marks a queue entry.
pub const MARKER_SUFFIX: &str = ".zip.trig";

/// Parse a queue filename into its repository identifier.
///
/// Accepts exactly `<digits>.zip.trig`; anything else is not a marker.
pub fn marker_repo_id(name: &str) -> Option<RepoId> {
    let stem = name.strip_suffix(MARKER_SUFFIX)?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse::<u64>().ok().map(RepoId)
}

/// One processed queue entry.
#[derive(Debug, Clone, Serialize)]
pub struct ScanEntry {
    pub id: RepoId,
    pub marker: String,
    pub outcome: Outcome,
}

/// Summary of a full queue scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub started_at: DateTime<Utc>,
    pub entries: Vec<ScanEntry>,
}

impl ScanReport {
    /// Whether every processed entry reached a success outcome.
    pub fn all_ok(&self) -> bool {
        self.entries.iter().all(|e| e.outcome.is_success())
    }

    pub fn succeeded(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_success())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }
}

/// Drain the pull queue once.
///
/// For each marker: derive the remote from the configured template,
/// reconcile `<files_root>/<id>`, and on a success outcome relocate the
/// marker to the push log directory to signal the downstream pipeline.
/// Markers for failed identifiers are left in place for the next scan.
pub fn scan(config: &Config) -> Result<ScanReport, TriggerError> {
    let queue = &config.pull_log_dir;
    if !queue.is_dir() {
        return Err(TriggerError::QueueDirMissing {
            path: queue.clone(),
        });
    }

    let mut names: Vec<String> = std::fs::read_dir(queue)
        .map_err(|e| io_err(queue, e))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let reconciler = Reconciler::new(config.primary_branch.clone());
    let started_at = Utc::now();
    let mut entries = Vec::new();

    for name in names {
        let Some(id) = marker_repo_id(&name) else {
            continue;
        };

        let remote = config.remote_for(id);
        let target = config.target_for(id);
        tracing::info!("trigger {id}: origin {remote}, target {}", target.display());

        let outcome = reconciler.reconcile(&remote, &target);
        if outcome.is_success() {
            if let Err(err) = relocate_marker(config, &name) {
                // The sync itself converged; the marker stays behind and the
                // next scan repeats the (idempotent) reconcile.
                tracing::error!("failed to relocate marker {name}: {err}");
            }
        } else {
            tracing::error!("failed to update {id} ({outcome})");
        }

        entries.push(ScanEntry {
            id,
            marker: name,
            outcome,
        });
    }

    Ok(ScanReport {
        started_at,
        entries,
    })
}

/// Move a marker from the pull queue to the push queue.
///
/// Falls back to copy + remove when the two directories live on different
/// filesystems and rename fails.
fn relocate_marker(config: &Config, name: &str) -> Result<(), TriggerError> {
    let src = config.pull_marker_path(name);
    let dst = config.push_marker_path(name);

    std::fs::create_dir_all(&config.push_log_dir)
        .map_err(|e| io_err(&config.push_log_dir, e))?;

    if std::fs::rename(&src, &dst).is_ok() {
        return Ok(());
    }
    copy_then_remove(&src, &dst)
}

fn copy_then_remove(src: &Path, dst: &Path) -> Result<(), TriggerError> {
    std::fs::copy(src, dst).map_err(|e| io_err(dst, e))?;
    std::fs::remove_file(src).map_err(|e| io_err(src, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_names_parse_to_identifiers() {
        assert_eq!(marker_repo_id("12345.zip.trig"), Some(RepoId(12345)));
        assert_eq!(marker_repo_id("7.zip.trig"), Some(RepoId(7)));
    }

    #[test]
    fn non_marker_names_are_skipped() {
        assert_eq!(marker_repo_id("12345.zip"), None);
        assert_eq!(marker_repo_id("12345.trig"), None);
        assert_eq!(marker_repo_id(".zip.trig"), None);
        assert_eq!(marker_repo_id("abc.zip.trig"), None);
        assert_eq!(marker_repo_id("12a45.zip.trig"), None);
        assert_eq!(marker_repo_id("+12345.zip.trig"), None);
        assert_eq!(marker_repo_id("notes.txt"), None);
    }

    #[test]
    fn scan_of_missing_queue_dir_is_an_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let cfg = Config::new(
            tmp.path().join("files"),
            tmp.path().join("no-such-queue"),
            tmp.path().join("dopush"),
            "https://example.org/git/",
        );
        let err = scan(&cfg).expect_err("missing queue dir");
        assert!(matches!(err, TriggerError::QueueDirMissing { .. }));
    }
}
