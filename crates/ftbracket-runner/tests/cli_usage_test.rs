//! CLI Usage Integration Test
//!
//! Runs the built binaries with too few arguments and verifies:
//! 1. Exit status 1
//! 2. A `Usage:` line on stdout
//! 3. No output file is created

use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_bin(bin: &str, args: &[&Path], cwd: &Path) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env_remove("FTBRACKET_CONFIG")
        .output()
        .expect("spawn binary")
}

fn assert_usage(output: &Output, expected: &str) {
    assert_eq!(output.status.code(), Some(1), "status {:?}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Usage:"), "stdout: {:?}", stdout);
    assert_eq!(stdout.trim_end(), expected);
}

#[test]
fn test_seed_bracket_with_one_argument_prints_usage() {
    let dir = tempdir().unwrap();
    let only_arg = dir.path().join("bracket.json");

    let output = run_bin(env!("CARGO_BIN_EXE_seed_bracket"), &[only_arg.as_path()], dir.path());

    assert_usage(&output, "Usage: seed_bracket <input_file> <output_file>");
    assert!(!only_arg.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_seed_bracket_with_no_arguments_prints_usage() {
    let dir = tempdir().unwrap();

    let output = run_bin(env!("CARGO_BIN_EXE_seed_bracket"), &[], dir.path());

    assert_usage(&output, "Usage: seed_bracket <input_file> <output_file>");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_fetch_leaderboard_with_no_arguments_prints_usage() {
    let dir = tempdir().unwrap();

    let output = run_bin(env!("CARGO_BIN_EXE_fetch_leaderboard"), &[], dir.path());

    assert_usage(&output, "Usage: fetch_leaderboard <output_filename>");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_other_export_tools_print_usage() {
    for (bin, usage) in [
        (
            env!("CARGO_BIN_EXE_export_ranked"),
            "Usage: export_ranked <input_file> <output_file>",
        ),
        (
            env!("CARGO_BIN_EXE_export_pairs"),
            "Usage: export_pairs <input_file> <output_file>",
        ),
    ] {
        let dir = tempdir().unwrap();
        let only_arg = dir.path().join("out.json");

        let output = run_bin(bin, &[only_arg.as_path()], dir.path());

        assert_usage(&output, usage);
        assert!(!only_arg.exists());
    }
}
