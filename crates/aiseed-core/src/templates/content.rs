//! Per-file content generators for the scaffolded project
//!
//! Each generator is a pure function of the project name, or a constant when
//! the file is the same for every project.

use crate::templates::baseline::BASELINE_PACKAGES;

/// Render `README.md` for the project.
pub fn readme(name: &str) -> String {
    format!(
        r#"# {name}

## Quickstart

```sh
python3 -m venv .venv
source .venv/bin/activate
pip install -r requirements.txt
python demo/run_demo.py
```

This template keeps the focus on AI/NLP tasks. `python3 -m venv .venv` is not run
automatically so you stay in control of environment creation.

## Layout

- `src/{name}` - package with a tiny runnable example using scikit-learn.
- `demo/run_demo.py` - CLI entry that imports the package and prints metrics.
- `scripts/check_env.py` - environment sanity checks.
- `requirements.txt` + `pyproject.toml` - editable installation and curated baseline.

## Troubleshooting

- **python vs python3**: macOS/Linux may need `python3` if `python` is 2.7.
- **pip vs pip3**: match the interpreter (`python3 -m pip install ...`).
- **Activating the venv**: `source .venv/bin/activate` (or `.\.venv\Scripts\activate` on Windows).
- **Missing deps**: run `python scripts/check_env.py` to get guided fixes.

## What's next?

1. Edit `src/{name}/main.py` to replace the toy classifier with your own data/model/workflow.
2. Keep `requirements.txt` aligned with your experiment and rerun `pip install -r requirements.txt` inside the project venv after changing dependencies.
3. Run `python demo/run_demo.py` to sanity check the package and `aiseed doctor` (which executes `scripts/check_env.py`) whenever the environment drifts.
4. Commit the generated files plus your new code; teammates can then clone, create `.venv`, and repeat the Quickstart to reproduce the project.
"#
    )
}

/// Fixed MIT text, identical for every project.
pub const LICENSE: &str = r#"MIT License

Copyright (c) 2024 The project authors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
"#;

/// Fixed ignore patterns for Python caches, virtual environments, and OS
/// artifacts.
pub const GITIGNORE: &str = r#"__pycache__/
*.py[cod]
.venv/
.mypy_cache/
.pytest_cache/
.DS_Store
venv/
"#;

/// Render `pyproject.toml`: PEP 621 metadata with the baseline dependency
/// list and a `src/<name>` package layout on the setuptools backend.
pub fn pyproject(name: &str) -> String {
    let deps: String = BASELINE_PACKAGES
        .iter()
        .map(|pkg| format!("    \"{}\",\n", pkg.pip_name))
        .collect();
    format!(
        r#"[project]
name = "{name}"
version = "0.1.0"
description = "Small reproducible AI/NLP starter."
readme = "README.md"
requires-python = ">=3.10"
license = "MIT"
dependencies = [
{deps}]

[tool.setuptools]
package-dir = {{ "" = "src" }}

[tool.setuptools.packages.find]
where = ["src"]

[build-system]
requires = ["setuptools>=61.0"]
build-backend = "setuptools.build_meta"
"#
    )
}

/// `src/<name>/__init__.py`: re-exports the package's single entry point.
pub const PACKAGE_INIT: &str = r#"'''Top-level package initializer.'''

from .main import run_demo

__all__ = ["run_demo"]
"#;

/// `src/<name>/main.py`: a runnable iris classifier with fixed split ratio
/// and seeds, so two fresh scaffolds print identical reports.
pub const PACKAGE_MAIN: &str = r#"'''Example AI/NLP entry point.'''

from sklearn import datasets
from sklearn.ensemble import RandomForestClassifier
from sklearn.metrics import classification_report
from sklearn.model_selection import train_test_split


def run_demo() -> None:
    '''Train a tiny classifier and print a report.'''
    data = datasets.load_iris()
    X_train, X_test, y_train, y_test = train_test_split(
        data.data, data.target, test_size=0.2, random_state=42
    )
    model = RandomForestClassifier(n_estimators=20, random_state=42)
    model.fit(X_train, y_train)
    predictions = model.predict(X_test)
    report = classification_report(y_test, predictions, zero_division=0)
    print("Iris classification report:\n", report)


if __name__ == "__main__":
    run_demo()
"#;

/// Render `demo/run_demo.py`: imports the generated package by name and
/// invokes its entry point.
pub fn demo_runner(name: &str) -> String {
    format!(
        r#"'''Demo runner that imports the project package.'''

from {name} import run_demo


def main() -> None:
    run_demo()


if __name__ == "__main__":
    main()
"#
    )
}
