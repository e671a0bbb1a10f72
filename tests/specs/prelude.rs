//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;

use std::path::Path;
use std::process::Command;

/// Returns a Command configured to run the trawl binary
pub fn trawl_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("trawl"))
}

/// Returns a Command set up to scan `root` with a mask and patterns.
pub fn scan(root: &Path, mask: &str, patterns: &[&str]) -> Command {
    let mut cmd = trawl_cmd();
    cmd.arg(root).arg(mask).args(patterns);
    cmd
}

/// Write a file from a slice of lines, newline-terminated.
pub fn write_lines(path: &Path, lines: &[&str]) {
    let mut text = lines.join("\n");
    text.push('\n');
    std::fs::write(path, text).unwrap();
}

/// Run the command and return its stdout as a string, asserting success.
pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "expected success, got {:?}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

/// Strip the diagnostic preamble, leaving only match output.
///
/// The preamble ends at the first blank line.
pub fn without_preamble(stdout: &str) -> String {
    match stdout.split_once("\n\n") {
        Some((_, rest)) => rest.to_string(),
        None => stdout.to_string(),
    }
}
