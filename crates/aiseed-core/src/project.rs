//! Project name validation
//!
//! The project name doubles as the directory name and as the generated
//! package's import name (`src/<name>/`), so it has to be a bare Python
//! identifier: letters, digits and underscores, no leading digit, and not a
//! reserved keyword.

use crate::error::Error;

/// Python's hard keywords. Soft keywords (`match`, `case`, `type`) are legal
/// identifiers and deliberately absent.
const PYTHON_KEYWORDS: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// Check whether `name` is a reserved Python keyword.
pub fn is_python_keyword(name: &str) -> bool {
    PYTHON_KEYWORDS.contains(&name)
}

/// Check whether `name` would be accepted by [`validate_name`].
pub fn is_valid_name(name: &str) -> bool {
    invalid_reason(name).is_none()
}

/// Validate a project name, reporting why it was rejected.
pub fn validate_name(name: &str) -> Result<(), Error> {
    match invalid_reason(name) {
        Some(reason) => Err(Error::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

fn invalid_reason(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("it is empty");
    };
    if first.is_numeric() {
        return Some("it must not start with a digit");
    }
    if !(first.is_alphabetic() || first == '_') {
        return Some("it must start with a letter or an underscore");
    }
    if chars.any(|c| !(c.is_alphanumeric() || c == '_')) {
        return Some("it may only contain letters, digits and underscores");
    }
    if is_python_keyword(name) {
        return Some("it is a reserved Python keyword");
    }
    None
}
