//! aiseed-core - Shared library for the aiseed scaffolding CLI
//!
//! This library provides the core functionality for scaffolding AI/NLP starter
//! projects and for re-checking the Python environment of an already
//! scaffolded project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure template rendering (`templates`),
//!   name validation (`project`), the tree writer (`scaffold`), and Python
//!   interpreter discovery plus the doctor child-process runner (`runtime`)
//! - **Layer 2: CLI/TUI Interface** - Optional cliclack-based command flows
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based command flows
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use aiseed_core::scaffold;
//!
//! let report = scaffold::scaffold_project("my_ai_project").await?;
//! println!("created {} files", report.files.len());
//! ```

pub mod error;
pub mod project;
pub mod runtime;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::Error;
pub use project::{is_valid_name, validate_name};
pub use runtime::{find_python, PythonInfo};
pub use scaffold::{scaffold_project, ScaffoldReport};
pub use templates::{project_files, TemplateFile, BASELINE_PACKAGES};

#[cfg(feature = "tui")]
pub use tui::run_init;
