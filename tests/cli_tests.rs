//! End-to-end tests for the two binaries
//!
//! These tests verify:
//! - Zero-argument invocation from the working directory
//! - Exit codes 0 and 1
//! - The report lines on stdout / stderr
//! - --print-config

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn check_utf8(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_check-utf8"))
        .current_dir(cwd)
        .args(args)
        .output()
        .unwrap()
}

fn test_encoding(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_test-encoding"))
        .current_dir(cwd)
        .args(args)
        .output()
        .unwrap()
}

fn write(root: &Path, rel: &str, bytes: &[u8]) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

#[test]
fn test_check_utf8_clean_repo_exits_zero_silently() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "README.md", "Réceptions".as_bytes());

    let output = check_utf8(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_check_utf8_reports_bad_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "docs/fr.md", b"R\xe9ceptions");

    let output = check_utf8(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "[ENCODING] Non-UTF8 file: docs/fr.md\n"
    );
}

#[test]
fn test_check_utf8_skip_dir_flag() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "node_modules/x/package.json", b"\xff");

    assert_eq!(check_utf8(temp_dir.path(), &[]).status.code(), Some(1));
    assert_eq!(
        check_utf8(temp_dir.path(), &["--skip-dir", "node_modules"])
            .status
            .code(),
        Some(0)
    );
}

#[test]
fn test_test_encoding_problem_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "lib/profile.dart", "Text('RÃ´le')".as_bytes());
    write(temp_dir.path(), "lib/home.dart", "Text('Dépôt')".as_bytes());

    let output = test_encoding(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ lib/profile.dart:"));
    assert!(stdout.contains("   - Problem: \"RÃ´le\""));
    assert!(stdout.contains("✅ lib/home.dart: accents correct"));
    assert!(stdout.contains("Total files: 2"));
    assert!(stdout.contains("❌ Problems detected: 1"));
}

#[test]
fn test_test_encoding_clean_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "lib/main.dart", b"void main() {}");

    let output = test_encoding(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("🔍"));
    assert!(stdout.contains("Total files: 1"));
    assert!(stdout.contains("🎉"));
}

#[test]
fn test_test_encoding_without_lib_dir() {
    let temp_dir = TempDir::new().unwrap();

    let output = test_encoding(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Directory read error lib"));
    assert!(stdout.contains("Total files: 0"));
}

#[test]
fn test_print_config() {
    let temp_dir = TempDir::new().unwrap();

    let output = test_encoding(temp_dir.path(), &["--print-config"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("root: lib"));
    assert!(stdout.contains("node_modules"));

    let output = check_utf8(temp_dir.path(), &["--print-config", "--skip-dir", "build"]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(".yaml"));
    assert!(stdout.contains("build"));
}
