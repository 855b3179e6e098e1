//! # yspata CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the `yspata` binary's integration tests (`run.rs`,
//! `exists.rs`, ...). Each `.rs` file in `cli/tests/` is compiled as its own
//! test crate and pulls this in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// # Get yspata Command (`yspata_cmd`)
///
/// An `assert_cmd::Command` pointing at the compiled `yspata` binary, with
/// `RUST_LOG` cleared so diagnostics never leak into assertions.
///
/// ## Panics
/// Panics if the `yspata` binary cannot be found via `Command::cargo_bin`.
pub fn yspata_cmd() -> Command {
    let mut cmd = Command::cargo_bin("yspata").expect("Failed to find yspata binary for testing");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `name` inside `dir` and returns the path.
pub fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write test fixture");
    path
}
