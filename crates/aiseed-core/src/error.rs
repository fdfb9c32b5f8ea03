//! Error taxonomy for the scaffolder and the doctor

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong in `aiseed-core`.
///
/// `Conflict` and `InvalidName` are precondition failures: they are raised
/// before the first write, so a failed `init` leaves the working directory
/// untouched. `MissingCheckScript` and `PythonNotFound` are raised before the
/// doctor spawns anything.
#[derive(Debug, Error)]
pub enum Error {
    /// The init target already exists, as a file or a directory.
    #[error("'{}' already exists", path.display())]
    Conflict { path: PathBuf },

    /// The project name is not a legal bare Python identifier.
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// `doctor` was run somewhere without a scaffolded check script.
    #[error("no scripts/check_env.py found in the current directory")]
    MissingCheckScript,

    /// No usable interpreter on PATH and no override set.
    #[error("no Python 3 interpreter found; install one or point AISEED_PYTHON at it")]
    PythonNotFound,

    /// The doctor child process could not be spawned at all.
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem failure past the precondition checks.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
