// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the `pt` binary.
//!
//! Covers argument handling, configuration layering and exit statuses as
//! seen from a shell.

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn pt(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pt"))
        .args(args)
        .current_dir(cwd)
        .env_remove("PT_TOOLS__GIT")
        .output()
        .expect("failed to run pt")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A git repository without any remote.
fn lonely_repo() -> TempDir {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let status = Command::new("git")
        .args(["init", "-q"])
        .current_dir(temp.path())
        .status()
        .expect("failed to run git");
    assert!(status.success());
    temp
}

// =============================================================================
// Usage errors
// =============================================================================

#[test]
fn cli_no_arguments_prints_help() {
    let temp = lonely_repo();
    let output = pt(&[], temp.path());
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage:"));
}

#[test]
fn cli_invalid_ticket_id() {
    let temp = lonely_repo();
    for args in [&["fetch", "abc"][..], &["checkout", "0"], &["-l", "6", "fetch", "1"]] {
        let output = pt(args, temp.path());
        assert_eq!(output.status.code(), Some(2), "{args:?}");
    }
}

#[test]
fn cli_version() {
    let temp = lonely_repo();
    let output = pt(&["--version"], temp.path());
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Exit statuses
// =============================================================================

#[test]
fn cli_no_remote_is_invalid_argument() {
    let temp = lonely_repo();
    let output = pt(&["fetch", "5"], temp.path());
    assert_eq!(output.status.code(), Some(22));
    assert!(stderr(&output).contains("Please define a Git remote"));
}

#[test]
fn cli_directory_option() {
    let repo = lonely_repo();
    let elsewhere = tempfile::tempdir().unwrap();
    let dir = repo.path().to_str().unwrap();
    let output = pt(&["-C", dir, "cleanup"], elsewhere.path());
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(String::from_utf8_lossy(&output.stdout).contains("cleanup skipped"));
}

#[test]
fn cli_closed_stdout_is_not_fatal() {
    let temp = lonely_repo();
    let mut child = Command::new(env!("CARGO_BIN_EXE_pt"))
        .arg("cleanup")
        .current_dir(temp.path())
        .env_remove("PT_TOOLS__GIT")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn pt");
    // The reader is gone before pt prints anything.
    drop(child.stdout.take());

    let output = child.wait_with_output().expect("failed to wait for pt");
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(!stderr(&output).contains("panicked"));
}

#[test]
fn cli_git_failure_passes_exit_code_through() {
    let temp = lonely_repo();
    // `git ls-remote` on a remote that does not exist exits with 128.
    let status = Command::new("git")
        .args(["remote", "add", "origin", "/nonexistent/server.git"])
        .current_dir(temp.path())
        .status()
        .unwrap();
    assert!(status.success());

    let output = pt(&["fetch", "5"], temp.path());
    assert_eq!(output.status.code(), Some(128));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn cli_env_overrides_git_program() {
    let temp = lonely_repo();
    let output = Command::new(env!("CARGO_BIN_EXE_pt"))
        .args(["fetch", "5"])
        .current_dir(temp.path())
        .env("PT_TOOLS__GIT", "/nonexistent/bin/git")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to spawn process"));
}

#[test]
fn cli_unrelated_env_is_ignored() {
    let temp = lonely_repo();
    let output = Command::new(env!("CARGO_BIN_EXE_pt"))
        .arg("cleanup")
        .current_dir(temp.path())
        .env_remove("PT_TOOLS__GIT")
        .env("PT_HOME", "/opt/pt")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(String::from_utf8_lossy(&output.stdout).contains("cleanup skipped"));
}

#[test]
fn cli_config_error_is_reported_once() {
    let temp = lonely_repo();
    fs::write(temp.path().join(".pt.toml"), "[global]
file_log_level = 7
").unwrap();

    let output = pt(&["cleanup"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert_eq!(err.matches("log level must be 0-5, got 7").count(), 1, "{err}");
}

#[test]
fn cli_repo_config_file_is_loaded() {
    let temp = lonely_repo();
    fs::write(temp.path().join(".pt.toml"), "[tools]\ngit = \"/from/repo/git\"\n").unwrap();

    let output = pt(&["fetch", "5"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("failed to spawn process"));
}

#[test]
fn cli_invalid_config_file() {
    let temp = lonely_repo();
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[global]\noutput_log_level = 9\n").unwrap();

    let output = pt(&["--config", config.to_str().unwrap(), "fetch", "5"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load config"));

    let output = pt(&["--config", "/nonexistent/pt.toml", "fetch", "5"], temp.path());
    assert_eq!(output.status.code(), Some(1));
}
