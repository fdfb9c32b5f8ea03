//! The compiled-in template set
//!
//! This module provides:
//! - The baseline dependency table (pip name / module name pairs)
//! - Per-file content generators
//! - The ordered file set `init` writes for a given project name

pub mod baseline;
pub mod content;

pub use baseline::{check_env_script, requirements_txt, BaselinePackage, BASELINE_PACKAGES};

/// One file of the template set: a path relative to the project root and its
/// rendered content.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    pub path: String,
    pub content: String,
}

impl TemplateFile {
    fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// The complete file set for a project, in write order.
///
/// `name` must already be validated; rendering itself never fails.
pub fn project_files(name: &str) -> Vec<TemplateFile> {
    vec![
        TemplateFile::new("README.md", content::readme(name)),
        TemplateFile::new("requirements.txt", baseline::requirements_txt()),
        TemplateFile::new("LICENSE", content::LICENSE),
        TemplateFile::new("pyproject.toml", content::pyproject(name)),
        TemplateFile::new(".gitignore", content::GITIGNORE),
        TemplateFile::new("scripts/check_env.py", baseline::check_env_script()),
        TemplateFile::new(format!("src/{name}/__init__.py"), content::PACKAGE_INIT),
        TemplateFile::new(format!("src/{name}/main.py"), content::PACKAGE_MAIN),
        TemplateFile::new("demo/run_demo.py", content::demo_runner(name)),
    ]
}
