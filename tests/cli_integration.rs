/*!
 * Integration tests for the cpdr binary
 */

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::process::Command;

use tempfile::tempdir;

fn cpdr_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cpdr"));
    cmd.args(args);
    cmd
}

#[test]
fn test_no_paths_exits_with_code_one() {
    let output = cpdr_command(&[]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_structure_only_run_succeeds_without_clipboard() {
    let temp_dir = tempdir().unwrap();
    let mut file = File::create(temp_dir.path().join("test.txt")).unwrap();
    writeln!(file, "Test content").unwrap();

    // Clipboard failure must not change the exit code
    let output = cpdr_command(&["-s", &temp_dir.path().to_string_lossy()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Directory structure"));
}

#[test]
fn test_debug_echoes_buffer() {
    let temp_dir = tempdir().unwrap();
    let mut file = File::create(temp_dir.path().join("test.txt")).unwrap();
    writeln!(file, "Test content for debug echo").unwrap();

    let output = cpdr_command(&["--debug", &temp_dir.path().to_string_lossy()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Directory Trees:"));
    assert!(stdout.contains("Test content for debug echo"));
}

#[test]
fn test_generate_completions_runs_no_traversal() {
    let output = cpdr_command(&["--generate", "bash"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cpdr"));
    assert!(!stdout.contains("Directory structure"));
}

#[test]
#[ignore] // This test requires tmux to be running and is ignored by default
          // To run it manually use: cargo test --test cli_integration -- --ignored
fn test_clipboard_roundtrip_via_tmux() {
    // Skip if not in a tmux session
    if env::var("TMUX").is_err() {
        return;
    }

    let temp_dir = tempdir().unwrap();
    let test_file = temp_dir.path().join("test.txt");
    let mut file = File::create(&test_file).unwrap();
    writeln!(file, "Test content for clipboard integration").unwrap();

    let status = cpdr_command(&[&temp_dir.path().to_string_lossy()])
        .status()
        .unwrap();
    assert!(status.success());

    // The buffer must contain the tree header and the file content
    let clipboard_output = Command::new("tmux").args(["show-buffer"]).output().unwrap();
    let clipboard_content = String::from_utf8_lossy(&clipboard_output.stdout);
    assert!(clipboard_content.contains("Directory Trees:"));
    assert!(clipboard_content.contains("Test content for clipboard integration"));

    let canonical = fs::canonicalize(temp_dir.path()).unwrap();
    assert!(clipboard_content.contains(&canonical.to_string_lossy().to_string()));
}
