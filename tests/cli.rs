//! Binary-level checks: exit codes and the split between stdout records and
//! stderr diagnostics.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn callscan(args: &[&Path], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_callscan"))
        .args(args)
        .current_dir(cwd)
        .env_remove("CALLSCAN_LOG")
        .env_remove("NO_COLOR")
        .output()
        .expect("failed to spawn callscan")
}

#[test]
fn missing_root_exits_one_without_records() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("no-such-dir");

    let output = callscan(&[&missing], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "stdout should be empty");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error walking directory"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn parse_failure_is_reported_but_not_fatal() {
    let dir = tempdir().unwrap();
    let bad = dir.path().join("bad.rs");
    fs::write(&bad, "struct 42;\n").unwrap();
    fs::write(dir.path().join("good.rs"), "fn good() { other(); }\n").unwrap();

    let output = callscan(&[dir.path()], dir.path());

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().any(|l| l.starts_with("good ")), "stdout: {}", stdout);
    assert!(stdout.lines().any(|l| l.starts_with("good.other ")), "stdout: {}", stdout);
    assert!(!stdout.contains("bad.rs"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error parsing"), "stderr: {}", stderr);
    assert!(stderr.contains(&bad.display().to_string()), "stderr: {}", stderr);
}

#[test]
fn piped_diagnostics_are_plain_text() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.rs"), "struct 42;\n").unwrap();

    let output = callscan(&[dir.path()], dir.path());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("WARN"), "stderr: {}", stderr);
    assert!(!stderr.contains('\x1b'), "escape codes on a pipe: {:?}", stderr);
}

#[test]
fn root_defaults_to_current_directory() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("here.rs"), "const HERE: u8 = 1;\n").unwrap();

    let output = callscan(&[], dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {}", stdout);
    assert!(lines[0].starts_with("HERE "));
    assert!(lines[0].ends_with("here.rs:1"));
}
