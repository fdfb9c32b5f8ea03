//! The doctor command: re-run the scaffolded environment check
//!
//! Locates `scripts/check_env.py` in the current working directory, spawns it
//! under a resolved Python interpreter with inherited stdio, and reports the
//! child's exit code unchanged. The child's own output is the diagnostic;
//! this side only adds one dimmed status line before the spawn.

use crate::error::Error;
use crate::runtime::python;
use colored::Colorize;
use std::path::Path;
use tokio::process::Command;

/// Where the doctor expects the check script, relative to the working
/// directory.
pub const CHECK_SCRIPT: &str = "scripts/check_env.py";

/// Run the doctor in the current working directory.
pub async fn run() -> Result<i32, Error> {
    run_in(Path::new("")).await
}

/// Run the doctor with the check script resolved under `base`.
///
/// Both preconditions (script present, interpreter resolvable) are checked
/// before anything is spawned.
pub async fn run_in(base: &Path) -> Result<i32, Error> {
    let script = base.join(CHECK_SCRIPT);
    if !script.exists() {
        return Err(Error::MissingCheckScript);
    }

    let interpreter = python::find_python()?;

    println!(
        "{}",
        format!("Running: {} {}", interpreter.command, script.display()).dimmed()
    );

    let status = Command::new(&interpreter.command)
        .arg(&script)
        .status()
        .await
        .map_err(|source| Error::Spawn {
            command: interpreter.command.clone(),
            source,
        })?;

    // A child killed by a signal has no exit code; report plain failure.
    Ok(status.code().unwrap_or(1))
}
