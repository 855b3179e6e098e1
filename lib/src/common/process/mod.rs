//! # yspata Process Execution Utilities (`common::process`)
//!
//! File: lib/src/common/process/mod.rs
//!
//! ## Overview
//!
//! Runs exactly one external program per call and hands back everything it
//! printed. This is not a supervisor: there are no retries, timeouts, process
//! groups or signal forwarding.
//!
//! ## Architecture
//!
//! - **`spec`**: `CommandSpec`, the immutable program + argument list.
//! - **`hooks`**: `Hooks`, the optional stdin producer and stdout/stderr
//!   consumers (`InputHook`, `OutputHook`), and the `Stream` name.
//! - **`result`**: `CommandResult`, the record of one execution attempt.
//! - **`runner`**: `ProcessRunner`, which drives the two phases:
//!   1. `start` creates the pipes and feeds stdin through the input hook.
//!   2. `Started::wait` launches the program, drains stdout and stderr on two
//!      scoped threads (teeing into any hooks), waits for exit and joins both
//!      drains before returning.
//!
//!   `run` is `start` followed by `wait`, stopping early if `start` failed.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::io::{Read, Write};
//! use yspata::common::process::{CommandSpec, Hooks, ProcessRunner};
//! use yspata::common::ui::Logger;
//!
//! let runner = ProcessRunner::new(Logger::default());
//! let logger = runner.logger().clone();
//! let hooks = Hooks::new()
//!     .on_stdin(|stdin: &mut dyn Write| {
//!         let _ = stdin.write_all(b"b\na\n");
//!     })
//!     .on_stdout(move |stdout: &mut dyn Read| logger.print_output(stdout));
//!
//! let result = runner.run(&CommandSpec::new("sort", Vec::<String>::new()), hooks);
//! assert_eq!(result.stdout, "a\nb\n");
//! ```
//!
pub mod hooks;
pub mod result;
pub mod runner;
pub mod spec;

pub use hooks::{Hooks, InputHook, OutputHook, Stream};
pub use result::CommandResult;
pub use runner::{ProcessRunner, Started, STDIN_BUFFER_LIMIT};
pub use spec::CommandSpec;
