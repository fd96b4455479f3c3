//! The `git` subprocess executor.
//!
//! Every mutation the engine performs goes through [`run_git`]: spawn the
//! binary with captured output, classify a non-zero exit as
//! [`PullError::CommandFailed`], and hand back trimmed stdout on success.

use std::path::Path;
use std::process::Command;

use crate::error::PullError;

/// Run `git <args>` with `cwd` as the working directory.
///
/// On a non-zero exit the failure is logged at error level (command line
/// plus captured stderr) and returned as [`PullError::CommandFailed`].
/// `quiet` suppresses only the log line, never the error itself — callers
/// probing for state that may legitimately be absent (e.g. an unconfigured
/// remote) set it and handle the error explicitly.
///
/// Successful invocations return stdout with surrounding whitespace trimmed.
pub fn run_git<I, S>(args: I, cwd: Option<&Path>, quiet: bool) -> Result<String, PullError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
    let command_line = format!("git {}", args.join(" "));

    let mut cmd = Command::new("git");
    cmd.args(&args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|e| PullError::Spawn {
        command: command_line.clone(),
        source: e,
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let code = output.status.code().unwrap_or(-1);
        if !quiet {
            tracing::error!("command failed: {command_line}");
            tracing::error!("stderr: [{stderr}]");
        }
        return Err(PullError::CommandFailed {
            command: command_line,
            code,
            stderr,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}
