//! Python 3 interpreter discovery
//!
//! The doctor re-runs the generated check script under "the currently active
//! interpreter". For a native binary that means whatever `python3` (or
//! `python`) resolves to on PATH, which an activated virtualenv shadows
//! first. `AISEED_PYTHON` overrides the probe entirely for automation.

use crate::error::Error;
use std::process::Command;

/// Environment variable that overrides interpreter discovery.
pub const PYTHON_ENV_OVERRIDE: &str = "AISEED_PYTHON";

/// Candidate commands probed on PATH, in order.
const CANDIDATES: &[&str] = &["python3", "python"];

/// A resolved interpreter command.
#[derive(Debug, Clone)]
pub struct PythonInfo {
    /// Command to spawn (a bare name resolved via PATH, or the override).
    pub command: String,
    /// Trimmed `--version` output; `None` for the unprobed override.
    pub version: Option<String>,
}

/// Resolve a Python interpreter.
///
/// The override is trusted as-is and not probed, so a broken value surfaces
/// as a spawn error instead of silently falling back to PATH.
pub fn find_python() -> Result<PythonInfo, Error> {
    if let Ok(command) = std::env::var(PYTHON_ENV_OVERRIDE) {
        if !command.is_empty() {
            return Ok(PythonInfo {
                command,
                version: None,
            });
        }
    }

    for candidate in CANDIDATES {
        if let Some(info) = probe(candidate) {
            return Ok(info);
        }
    }

    Err(Error::PythonNotFound)
}

/// Run `<command> --version` and keep the command if it succeeds.
fn probe(command: &str) -> Option<PythonInfo> {
    let output = Command::new(command).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            Some(PythonInfo {
                command: command.to_string(),
                version: Some(version),
            })
        }
        _ => None,
    }
}
