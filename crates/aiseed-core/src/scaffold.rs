//! Precondition checks and the project tree writer

use crate::error::Error;
use crate::project;
use crate::templates;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What a successful scaffold produced.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// The project root that was created.
    pub root: PathBuf,
    /// Relative paths of the written files, in write order.
    pub files: Vec<String>,
}

/// Scaffold a project named `name` in the current working directory.
pub async fn scaffold_project(name: &str) -> Result<ScaffoldReport, Error> {
    scaffold_project_in(Path::new(""), name).await
}

/// Scaffold a project named `name` under `parent`.
///
/// Preconditions are checked before the first write, in this order: the
/// target must not exist (as a file or a directory), then the name must be a
/// valid bare identifier. Either failure leaves `parent` untouched.
pub async fn scaffold_project_in(parent: &Path, name: &str) -> Result<ScaffoldReport, Error> {
    let root = parent.join(name);
    if root.exists() {
        return Err(Error::Conflict {
            path: PathBuf::from(name),
        });
    }
    project::validate_name(name)?;

    let mut written = Vec::new();
    for file in templates::project_files(name) {
        let target = root.join(&file.path);
        if let Some(dir) = target.parent() {
            fs::create_dir_all(dir).await.map_err(|source| Error::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(&target, &file.content)
            .await
            .map_err(|source| Error::Io {
                path: target.clone(),
                source,
            })?;
        written.push(file.path);
    }

    Ok(ScaffoldReport {
        root,
        files: written,
    })
}

/// The follow-up shell steps shown after a successful scaffold.
pub fn next_steps(name: &str) -> Vec<String> {
    vec![
        format!("cd {name}"),
        "python3 -m venv .venv".to_string(),
        "source .venv/bin/activate".to_string(),
        "python -m pip install -r requirements.txt".to_string(),
    ]
}
