//! End-to-end tests for the aiseed binary.
//!
//! Every test runs the compiled binary in its own temporary working
//! directory and asserts on exit codes and the filesystem it leaves behind.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn aiseed() -> Command {
    Command::cargo_bin("aiseed").unwrap()
}

fn files_under(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    files.sort();
    files
}

#[test]
fn init_creates_exactly_the_documented_tree() {
    let dir = tempfile::tempdir().unwrap();

    aiseed()
        .current_dir(dir.path())
        .args(["init", "demoproj"])
        .assert()
        .success();

    let mut expected: Vec<String> = [
        "README.md",
        "requirements.txt",
        "LICENSE",
        "pyproject.toml",
        ".gitignore",
        "scripts/check_env.py",
        "src/demoproj/__init__.py",
        "src/demoproj/main.py",
        "demo/run_demo.py",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    expected.sort();

    assert_eq!(files_under(&dir.path().join("demoproj")), expected);
}

#[test]
fn init_refuses_an_existing_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("taken")).unwrap();
    fs::write(dir.path().join("taken/keep.txt"), "precious").unwrap();

    aiseed()
        .current_dir(dir.path())
        .args(["init", "taken"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    // The existing entry is untouched and gained nothing.
    assert_eq!(
        fs::read_to_string(dir.path().join("taken/keep.txt")).unwrap(),
        "precious"
    );
    assert_eq!(fs::read_dir(dir.path().join("taken")).unwrap().count(), 1);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn init_refuses_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("taken"), "not a directory").unwrap();

    aiseed()
        .current_dir(dir.path())
        .args(["init", "taken"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(dir.path().join("taken")).unwrap(),
        "not a directory"
    );
}

#[test]
fn init_rejects_invalid_names_without_writing() {
    for bad in ["2fast", "has-dash", "has space", "class"] {
        let dir = tempfile::tempdir().unwrap();

        aiseed()
            .current_dir(dir.path())
            .args(["init", bad])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("invalid project name"));

        assert_eq!(
            fs::read_dir(dir.path()).unwrap().count(),
            0,
            "{bad:?} left files behind"
        );
    }
}

#[test]
fn second_init_fails_and_preserves_the_first_run() {
    let dir = tempfile::tempdir().unwrap();

    aiseed()
        .current_dir(dir.path())
        .args(["init", "demoproj"])
        .assert()
        .success();
    let readme = dir.path().join("demoproj/README.md");
    let before = fs::read_to_string(&readme).unwrap();
    let tree_before = files_under(&dir.path().join("demoproj"));

    aiseed()
        .current_dir(dir.path())
        .args(["init", "demoproj"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&readme).unwrap(), before);
    assert_eq!(files_under(&dir.path().join("demoproj")), tree_before);
}

#[test]
fn doctor_fails_cleanly_without_a_check_script() {
    let dir = tempfile::tempdir().unwrap();

    aiseed()
        .current_dir(dir.path())
        .arg("doctor")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("scripts/check_env.py"));
}

#[test]
fn doctor_passes_the_child_exit_code_through() {
    let dir = tempfile::tempdir().unwrap();
    let scripts = dir.path().join("scripts");
    fs::create_dir(&scripts).unwrap();

    // A shell stand-in for the interpreter keeps the test hermetic.
    fs::write(scripts.join("check_env.py"), "exit 0\n").unwrap();
    aiseed()
        .current_dir(dir.path())
        .env("AISEED_PYTHON", "sh")
        .arg("doctor")
        .assert()
        .success();

    fs::write(scripts.join("check_env.py"), "exit 3\n").unwrap();
    aiseed()
        .current_dir(dir.path())
        .env("AISEED_PYTHON", "sh")
        .arg("doctor")
        .assert()
        .failure()
        .code(3);
}

#[test]
fn generated_files_agree_on_the_project_name() {
    let dir = tempfile::tempdir().unwrap();

    aiseed()
        .current_dir(dir.path())
        .args(["init", "my_pkg"])
        .assert()
        .success();

    let root = dir.path().join("my_pkg");
    let pyproject = fs::read_to_string(root.join("pyproject.toml")).unwrap();
    let init = fs::read_to_string(root.join("src/my_pkg/__init__.py")).unwrap();
    let demo = fs::read_to_string(root.join("demo/run_demo.py")).unwrap();

    assert!(pyproject.contains("name = \"my_pkg\""));
    assert!(init.contains("run_demo"));
    assert!(demo.contains("from my_pkg import run_demo"));
}

#[test]
fn requirements_and_checker_render_from_one_table() {
    let dir = tempfile::tempdir().unwrap();

    aiseed()
        .current_dir(dir.path())
        .args(["init", "demoproj"])
        .assert()
        .success();

    let root = dir.path().join("demoproj");
    let requirements = fs::read_to_string(root.join("requirements.txt")).unwrap();
    let checker = fs::read_to_string(root.join("scripts/check_env.py")).unwrap();

    // pip names in the manifest, module names in the checker.
    assert!(requirements.contains("scikit-learn"));
    assert!(requirements.contains("sentence-transformers"));
    assert!(checker.contains("\"sklearn\""));
    assert!(checker.contains("\"sentence_transformers\""));
    assert!(!checker.contains("scikit-learn"));
}

#[test]
fn version_flag_succeeds() {
    aiseed()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aiseed"));
}

#[test]
fn bare_invocation_prints_help_and_fails() {
    aiseed()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    aiseed().arg("frobnicate").assert().failure().code(2);
}
