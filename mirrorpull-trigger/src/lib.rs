//! # mirrorpull-trigger
//!
//! The trigger-queue collaborator around the reconciliation engine.
//!
//! A pull request for repository `N` is a marker file named `N.zip.trig` in
//! the pull log directory. [`scan`] walks that directory, reconciles each
//! matching identifier into `<files_root>/<N>`, and relocates the marker to
//! the push log directory on success — signaling the downstream indexing
//! pipeline. Failed markers stay put and are retried on the next scan.

pub mod config;
pub mod error;
pub mod scan;

pub use config::Config;
pub use error::TriggerError;
pub use scan::{scan, ScanEntry, ScanReport};
