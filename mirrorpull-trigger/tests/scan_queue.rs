//! End-to-end queue scans against real git repositories.
//!
//! The upstream template base is a local directory: the remote for id `N`
//! resolves to `<upstreams>/N.git/`, so fixtures are plain working copies
//! in directories named `N.git`.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use mirrorpull_core::command::run_git;
use mirrorpull_core::types::Outcome;
use mirrorpull_trigger::{scan, Config};

fn git(dir: &Path, args: &[&str]) {
    run_git(args.iter().copied(), Some(dir), false)
        .unwrap_or_else(|e| panic!("git {args:?} in {}: {e}", dir.display()));
}

/// Create `<upstreams>/<id>.git` on branch `main` with one committed file.
fn init_upstream(upstreams: &Path, id: u64) -> PathBuf {
    let dir = upstreams.join(format!("{id}.git"));
    fs::create_dir_all(&dir).unwrap();
    git(&dir, &["init", "-b", "main"]);
    fs::write(dir.join("a.txt"), "alpha\n").unwrap();
    git(&dir, &["add", "."]);
    git(
        &dir,
        &[
            "-c",
            "user.name=fixture",
            "-c",
            "user.email=fixture@localhost",
            "commit",
            "-m",
            "initial",
        ],
    );
    dir
}

struct QueueFixture {
    _root: TempDir,
    upstreams: PathBuf,
    config: Config,
}

impl QueueFixture {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let upstreams = root.path().join("upstreams");
        let files = root.path().join("files");
        let dopull = root.path().join("logs/dopull");
        let dopush = root.path().join("logs/dopush");
        for dir in [&upstreams, &files, &dopull] {
            fs::create_dir_all(dir).unwrap();
        }

        let base = format!("{}/", upstreams.display());
        let config = Config::new(files, dopull, dopush, base);
        Self {
            _root: root,
            upstreams,
            config,
        }
    }

    fn drop_marker(&self, name: &str) {
        fs::write(self.config.pull_log_dir.join(name), "").unwrap();
    }
}

#[test]
fn successful_sync_relocates_the_marker() {
    let fx = QueueFixture::new();
    init_upstream(&fx.upstreams, 12345);
    fx.drop_marker("12345.zip.trig");

    let report = scan(&fx.config).expect("scan");
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].outcome, Outcome::Cloned);
    assert!(report.all_ok());

    // Content landed under files_root/<id>.
    assert_eq!(
        fs::read_to_string(fx.config.target_for(12345.into()).join("a.txt")).unwrap(),
        "alpha\n"
    );

    // Marker moved from the pull queue to the push queue.
    assert!(!fx.config.pull_marker_path("12345.zip.trig").exists());
    assert!(fx.config.push_marker_path("12345.zip.trig").exists());
}

#[test]
fn failed_sync_leaves_the_marker_for_retry() {
    let fx = QueueFixture::new();
    // No upstream repository for this id: the clone fails.
    fx.drop_marker("99999.zip.trig");

    let report = scan(&fx.config).expect("scan");
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].outcome, Outcome::Failed);
    assert!(!report.all_ok());
    assert_eq!(report.failed(), 1);

    assert!(fx.config.pull_marker_path("99999.zip.trig").exists());
    assert!(!fx.config.push_marker_path("99999.zip.trig").exists());
}

#[test]
fn one_failure_does_not_stop_the_scan() {
    let fx = QueueFixture::new();
    init_upstream(&fx.upstreams, 200);
    fx.drop_marker("100.zip.trig"); // no upstream — fails first (sorted order)
    fx.drop_marker("200.zip.trig");

    let report = scan(&fx.config).expect("scan");
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].outcome, Outcome::Failed);
    assert_eq!(report.entries[1].outcome, Outcome::Cloned);
    assert_eq!(report.succeeded(), 1);

    assert!(fx.config.pull_marker_path("100.zip.trig").exists());
    assert!(fx.config.push_marker_path("200.zip.trig").exists());
}

#[test]
fn non_marker_entries_are_ignored() {
    let fx = QueueFixture::new();
    fx.drop_marker("notes.txt");
    fx.drop_marker("12345.zip");
    fs::create_dir_all(fx.config.pull_log_dir.join("7.zip.trig")).unwrap();

    let report = scan(&fx.config).expect("scan");
    assert!(report.entries.is_empty());
}

#[test]
fn second_scan_pulls_the_existing_mirror() {
    let fx = QueueFixture::new();
    let upstream = init_upstream(&fx.upstreams, 31);
    fx.drop_marker("31.zip.trig");
    scan(&fx.config).expect("first scan");

    fs::write(upstream.join("b.txt"), "beta\n").unwrap();
    git(&upstream, &["add", "."]);
    git(
        &upstream,
        &[
            "-c",
            "user.name=fixture",
            "-c",
            "user.email=fixture@localhost",
            "commit",
            "-m",
            "add b",
        ],
    );

    fx.drop_marker("31.zip.trig");
    let report = scan(&fx.config).expect("second scan");
    assert_eq!(report.entries[0].outcome, Outcome::Pulled);
    assert!(fx.config.target_for(31.into()).join("b.txt").exists());
}
