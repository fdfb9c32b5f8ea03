//! The curated baseline dependency table
//!
//! Single source of truth for the packages every scaffolded project starts
//! with. A pip distribution name and the module it installs are not always
//! the same string (`scikit-learn` installs `sklearn`), so each entry carries
//! both: `requirements.txt` and `pyproject.toml` render from the pip names,
//! the generated `check_env.py` renders its `REQUIRED` list from the module
//! names. Rendering everything from one table keeps the three files from
//! drifting apart.

/// One curated dependency: how pip knows it, and how `import` knows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaselinePackage {
    /// Distribution name used in `requirements.txt` / `pyproject.toml`.
    pub pip_name: &'static str,
    /// Importable module name used in the generated `check_env.py`.
    pub module_name: &'static str,
}

/// Minimal baseline for embedding/classification workflows.
pub const BASELINE_PACKAGES: &[BaselinePackage] = &[
    BaselinePackage { pip_name: "numpy", module_name: "numpy" },
    BaselinePackage { pip_name: "scipy", module_name: "scipy" },
    BaselinePackage { pip_name: "scikit-learn", module_name: "sklearn" },
    BaselinePackage { pip_name: "requests", module_name: "requests" },
    BaselinePackage { pip_name: "tqdm", module_name: "tqdm" },
    BaselinePackage { pip_name: "torch", module_name: "torch" },
    BaselinePackage { pip_name: "transformers", module_name: "transformers" },
    BaselinePackage { pip_name: "sentence-transformers", module_name: "sentence_transformers" },
];

/// Render `requirements.txt`: a header comment plus the pip names,
/// unversioned, one per line.
pub fn requirements_txt() -> String {
    let mut out =
        String::from("# Minimal baseline for embedding/classification workflows (trim as you go)\n");
    for pkg in BASELINE_PACKAGES {
        out.push_str(pkg.pip_name);
        out.push('\n');
    }
    out
}

const CHECK_SCRIPT_HEAD: &str = r#"'''Simple environment validator for the project.'''

import importlib.util
import sys
from pathlib import Path

REQUIRED = [
"#;

const CHECK_SCRIPT_TAIL: &str = r#"]


def _module_exists(name: str) -> bool:
    return importlib.util.find_spec(name) is not None


def _main() -> None:
    print(f"Python: {sys.version.splitlines()[0]}")
    print(f"Executable: {sys.executable}")
    pip_path = Path(sys.executable).parent / "pip"
    print(f"Pip: {pip_path}")

    missing = [pkg for pkg in REQUIRED if not _module_exists(pkg)]
    if missing:
        print("\nMissing packages detected:")
        for pkg in missing:
            print(f" - {pkg}")
        print("\nInstall them with: python -m pip install -r requirements.txt")
        sys.exit(1)

    print("\nEnvironment looks healthy. Run `python demo/run_demo.py` to verify.")


if __name__ == "__main__":
    _main()
"#;

/// Render `scripts/check_env.py`. The script probes each module with
/// `importlib.util.find_spec` instead of importing it, so a half-broken
/// package reports as present rather than crashing the check.
pub fn check_env_script() -> String {
    let mut out = String::from(CHECK_SCRIPT_HEAD);
    for pkg in BASELINE_PACKAGES {
        out.push_str(&format!("    \"{}\",\n", pkg.module_name));
    }
    out.push_str(CHECK_SCRIPT_TAIL);
    out
}
