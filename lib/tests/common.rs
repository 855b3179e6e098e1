//! # yspata Library Integration Test Common Helpers
//!
//! File: lib/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the library's integration tests. Each test file declares
//! `mod common;` to use them.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use yspata::common::process::{CommandResult, CommandSpec, Hooks, ProcessRunner};
pub use yspata::common::ui::{LogBuffer, LogLevel, Logger};
pub use yspata::YspataError;

/// A runner whose console output is kept in memory instead of going to stdout.
pub fn buffered_runner() -> (ProcessRunner, LogBuffer) {
    let (logger, buffer) = Logger::buffered(LogLevel::Info);
    (ProcessRunner::new(logger), buffer)
}

/// Runs `sh -c <script>` with no hooks.
pub fn run_sh(script: &str) -> CommandResult {
    let (runner, _) = buffered_runner();
    runner.run(&CommandSpec::new("sh", ["-c", script]), Hooks::new())
}
