//! # Stream Hooks
//!
//! File: lib/src/common/process/hooks.rs
//!
//! ## Overview
//!
//! Hooks give the caller synchronous access to a child's standard streams:
//!
//! - an `InputHook` writes the child's stdin;
//! - an `OutputHook` reads the child's stdout or stderr.
//!
//! The runner owns every stream. It opens the pipe, lends the hook a
//! `&mut dyn Write` / `&mut dyn Read`, and closes or finishes draining the
//! stream once the hook returns, whatever the hook did with it.
//!
//! Any closure with the matching signature is a hook:
//!
//! ```rust
//! use std::io::{Read, Write};
//! use yspata::common::process::Hooks;
//!
//! let hooks = Hooks::new()
//!     .on_stdin(|w: &mut dyn Write| {
//!         let _ = w.write_all(b"input");
//!     })
//!     .on_stderr(|r: &mut dyn Read| {
//!         let mut s = String::new();
//!         let _ = r.read_to_string(&mut s);
//!     });
//! assert!(hooks.has_stdin() && hooks.has_stderr() && !hooks.has_stdout());
//! ```
//!
use std::fmt;
use std::io::{Read, Write};

/// One of the three standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdin,
    Stdout,
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stream::Stdin => "stdin",
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        })
    }
}

/// Produces the bytes a child reads on stdin.
///
/// Runs on the caller's thread during `ProcessRunner::start`, before the child
/// is launched. The stream is closed as soon as `produce` returns.
pub trait InputHook {
    fn produce(&mut self, stdin: &mut dyn Write);
}

impl<F> InputHook for F
where
    F: FnMut(&mut dyn Write),
{
    fn produce(&mut self, stdin: &mut dyn Write) {
        self(stdin)
    }
}

/// Consumes a child's stdout or stderr.
///
/// Runs on the stream's drain thread while the child is running. Every byte
/// the hook reads is also captured into the `CommandResult`; bytes it leaves
/// unread are drained and captured after it returns.
pub trait OutputHook: Send {
    fn consume(&mut self, stream: &mut dyn Read);
}

impl<F> OutputHook for F
where
    F: FnMut(&mut dyn Read) + Send,
{
    fn consume(&mut self, stream: &mut dyn Read) {
        self(stream)
    }
}

/// Optional hooks for one run. Empty by default.
#[derive(Default)]
pub struct Hooks<'a> {
    pub(crate) stdin: Option<Box<dyn InputHook + 'a>>,
    pub(crate) stdout: Option<Box<dyn OutputHook + 'a>>,
    pub(crate) stderr: Option<Box<dyn OutputHook + 'a>>,
}

impl<'a> Hooks<'a> {
    pub fn new() -> Self {
        Hooks::default()
    }

    /// Feeds the child's stdin. Without it the child sees an empty, closed stdin.
    pub fn on_stdin<F>(self, hook: F) -> Self
    where
        F: FnMut(&mut dyn Write) + 'a,
    {
        self.with_stdin(hook)
    }

    pub fn on_stdout<F>(self, hook: F) -> Self
    where
        F: FnMut(&mut dyn Read) + Send + 'a,
    {
        self.with_stdout(hook)
    }

    pub fn on_stderr<F>(self, hook: F) -> Self
    where
        F: FnMut(&mut dyn Read) + Send + 'a,
    {
        self.with_stderr(hook)
    }

    /// Like `on_stdin`, for types implementing `InputHook`.
    pub fn with_stdin(mut self, hook: impl InputHook + 'a) -> Self {
        self.stdin = Some(Box::new(hook));
        self
    }

    /// Like `on_stdout`, for types implementing `OutputHook`.
    pub fn with_stdout(mut self, hook: impl OutputHook + 'a) -> Self {
        self.stdout = Some(Box::new(hook));
        self
    }

    /// Like `on_stderr`, for types implementing `OutputHook`.
    pub fn with_stderr(mut self, hook: impl OutputHook + 'a) -> Self {
        self.stderr = Some(Box::new(hook));
        self
    }

    pub fn has_stdin(&self) -> bool {
        self.stdin.is_some()
    }

    pub fn has_stdout(&self) -> bool {
        self.stdout.is_some()
    }

    pub fn has_stderr(&self) -> bool {
        self.stderr.is_some()
    }
}

impl fmt::Debug for Hooks<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("stdin", &self.has_stdin())
            .field("stdout", &self.has_stdout())
            .field("stderr", &self.has_stderr())
            .finish()
    }
}
