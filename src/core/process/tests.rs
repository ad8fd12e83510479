// pt-rs: Patchset Tool for ticket-based code review
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use super::io::{LineCapture, decode_line};
use crate::error::{ProcessError, exit_code_of};

fn sh(script: &str) -> ProcessBuilder {
    ProcessBuilder::new("/bin/sh").args(["-c", script])
}

#[test]
fn test_line_capture_trims_and_stops_at_blank() {
    let mut capture = LineCapture::new(false);
    assert!(capture.push("  first  "));
    assert!(capture.push("\tsecond"));
    assert!(!capture.push("   "));
    assert!(!capture.push("third"));
    assert_eq!(capture.into_lines(), vec!["first", "second"]);
}

#[tokio::test]
async fn test_process_captures_trimmed_lines() {
    let output = sh("printf '  alpha  \\nbeta\\n'")
        .run()
        .await
        .expect("sh should succeed");

    assert!(output.success());
    assert_eq!(output.lines(), ["alpha", "beta"]);
}

#[test]
fn test_decode_line_replaces_invalid_utf8() {
    assert_eq!(decode_line(b"ticket/5\r\n"), "ticket/5");
    assert_eq!(decode_line(b"caf\xe9\n"), "caf\u{fffd}");
    assert_eq!(decode_line(b"last"), "last");
}

#[tokio::test]
async fn test_process_keeps_lines_after_invalid_utf8() {
    let output = sh("printf 'caf\\351\\nnext\\n'")
        .run()
        .await
        .expect("sh should succeed");

    assert_eq!(output.lines(), ["caf\u{fffd}", "next"]);
}

#[tokio::test]
async fn test_process_capture_ends_at_blank_line() {
    let output = sh("printf 'one\\n\\ntwo\\nthree\\n'")
        .run()
        .await
        .expect("sh should succeed");

    assert_eq!(output.into_lines(), vec!["one"]);
}

#[tokio::test]
async fn test_process_non_zero_exit_fails_with_child_code() {
    let err = sh("echo partial; exit 3")
        .run()
        .await
        .expect_err("exit 3 should fail");

    let process_err = err
        .chain()
        .find_map(|c| c.downcast_ref::<crate::error::PtError>())
        .expect("error should be a PtError");
    assert!(process_err.to_string().contains("exited with code 3"));
    assert_eq!(exit_code_of(&err), 3);
}

#[tokio::test]
async fn test_process_allow_failure_returns_exit_code() {
    let output = sh("echo ignored; exit 42")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("allowed failure should complete");

    assert_eq!(output.exit_code(), 42);
    assert_eq!(output.lines(), ["ignored"]);
}

#[tokio::test]
async fn test_process_merge_stderr_captures_both_streams() {
    let output = sh("echo out; echo err 1>&2")
        .flag(ProcessFlags::MERGE_STDERR)
        .run()
        .await
        .expect("sh should succeed");

    let mut lines = output.into_lines();
    lines.sort();
    assert_eq!(lines, vec!["err", "out"]);
}

#[tokio::test]
async fn test_process_stderr_not_captured_by_default() {
    let output = sh("echo out; echo err 1>&2")
        .run()
        .await
        .expect("sh should succeed");

    assert_eq!(output.lines(), ["out"]);
}

#[tokio::test]
async fn test_process_runs_in_working_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = sh("pwd")
        .cwd(dir.path())
        .run()
        .await
        .expect("pwd should succeed");

    let expected = dir.path().canonicalize().expect("canonical tempdir");
    let actual = std::path::Path::new(&output.lines()[0])
        .canonicalize()
        .expect("canonical pwd");
    assert_eq!(actual, expected);
}

#[test]
fn test_executable_lookup() {
    let builder = ProcessBuilder::which("sh").expect("sh should be in PATH");
    assert!(builder.program().exists());
    assert_eq!(ProcessBuilder::resolve("sh").as_deref(), Some(builder.program()));

    let err = ProcessBuilder::which("nonexistent_program_12345").expect_err("not in PATH");
    assert!(matches!(err, ProcessError::ExecutableNotFound { ref name } if name == "nonexistent_program_12345"));
}
