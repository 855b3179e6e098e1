//! # yspata Common Utilities (`common`)
//!
//! File: lib/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the helper modules shared by command-line tools. Each submodule
//! covers one concern:
//!
//! - **`fs`**: path joining, existence checks, checked file opening.
//! - **`process`**: running an external program with captured output and optional stream hooks.
//! - **`system`**: OS/arch detection, version labels, exit helpers.
//! - **`ui`**: the leveled console `Logger` and the fail-fast `Reporter`.
//!
//! ```rust,no_run
//! use yspata::common::{fs, process, system, ui};
//!
//! let reporter = ui::Reporter::new(ui::Logger::default());
//! reporter.fail_if_not_exists(fs::io::join(["config", "tool.toml"]));
//!
//! let runner = process::ProcessRunner::new(reporter.logger().clone());
//! let result = runner.run(&process::CommandSpec::new("git", ["status"]), process::Hooks::new());
//! reporter.fail_if_command(&result, "git status failed");
//! system::exit::success();
//! ```
//!

/// Filesystem helpers (`join`, `exists`, `open_existing`).
pub mod fs;
/// External process execution with output capture and stream hooks.
pub mod process;
/// Platform detection and exit-code helpers.
pub mod system;
/// Console logging and fail-fast error reporting.
pub mod ui;
