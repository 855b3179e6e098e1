//! # yspata Library Root
//!
//! File: lib/src/lib.rs
//!
//! ## Overview
//!
//! `yspata` is a small collection of helpers shared by command-line tools:
//!
//! - **`common::process`**: run one external program, optionally feed its
//!   stdin and intercept its stdout/stderr, and capture everything it printed.
//! - **`common::ui`**: a leveled console `Logger` and a fail-fast `Reporter`.
//! - **`common::fs`**: path joining, existence checks and checked file opening.
//! - **`common::system`**: OS/arch detection, version strings and exit helpers.
//! - **`core`**: the error type and the TOML configuration layer.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use yspata::{CommandSpec, Hooks, Logger, ProcessRunner};
//!
//! let runner = ProcessRunner::new(Logger::default());
//! let result = runner.run(&CommandSpec::new("echo", ["hello"]), Hooks::new());
//! assert_eq!(result.stdout, "hello\n");
//! ```
//!
pub mod common;
pub mod core;

pub use crate::common::process::{
    CommandResult, CommandSpec, Hooks, InputHook, OutputHook, ProcessRunner, Started, Stream,
};
pub use crate::common::ui::{LogLevel, Logger, Reporter};
pub use crate::core::config::Config;
pub use crate::core::error::{Result, YspataError};
