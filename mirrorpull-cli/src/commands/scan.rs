//! `mirrorpull scan` — drain the trigger queue once.

use anyhow::{Context, Result};
use clap::Args;

use mirrorpull_trigger::{scan, Config, ScanReport};

/// Arguments for `mirrorpull scan`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Emit the scan report as JSON instead of the plain summary.
    #[arg(long)]
    pub json: bool,
}

impl ScanArgs {
    pub fn run(self) -> Result<()> {
        let config = Config::from_env();
        let report = scan(&config).context("queue scan failed")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }

        // Per-entry failures keep their markers and are retried on the next
        // scan; only a scan that could not run at all exits non-zero.
        Ok(())
    }
}

fn print_report(report: &ScanReport) {
    if report.entries.is_empty() {
        println!("queue empty — nothing to do");
        return;
    }

    for entry in &report.entries {
        let mark = if entry.outcome.is_success() { "✓" } else { "✗" };
        println!("  {mark}  {} ({})", entry.id, entry.outcome);
    }
    println!(
        "{} synced, {} failed (failed markers retained for retry)",
        report.succeeded(),
        report.failed()
    );
}
