//! Python interpreter discovery and the doctor command

pub mod doctor;
pub mod python;

pub use doctor::CHECK_SCRIPT;
pub use python::{find_python, PythonInfo, PYTHON_ENV_OVERRIDE};
