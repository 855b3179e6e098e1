//! # yspata Fail-Fast Reporter
//!
//! File: lib/src/common/ui/reporter.rs
//!
//! ## Overview
//!
//! Command-line tools built on this library follow a "fail fast" policy: most
//! errors are not recoverable, so the call site reports them and terminates
//! the process with exit code 1. `Reporter` packages that policy.
//!
//! ## Architecture
//!
//! - `report` hands an optional error and a message to the `on_error`
//!   callback. The default callback prints `Error: <message>` through the
//!   reporter's `Logger`.
//! - `fail_if` unwraps a `Result`, reporting and exiting on `Err`.
//! - `fail_if_not_exists`, `open` and `open_with` are the file-precondition
//!   helpers: a missing file is reported as `File '<name>' is not found`.
//! - `fail_if_command` exits when a `CommandResult` carries an error.
//!
//! The callback is held by the `Reporter` value rather than in a global, so a
//! test suite can build as many reporters as it needs.
//!
use std::error::Error as StdError;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use crate::common::fs::io;
use crate::common::process::CommandResult;
use crate::common::system::exit;
use crate::common::ui::logger::Logger;
use crate::core::error::YspataError;

/// Callback invoked with the failing error (if any) and the formatted message.
pub type OnError = dyn Fn(Option<&(dyn StdError + 'static)>, &str) + Send + Sync;

/// Reports errors and terminates the process on fatal ones.
#[derive(Clone)]
pub struct Reporter {
    logger: Logger,
    on_error: Arc<OnError>,
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::new(Logger::default())
    }
}

impl Reporter {
    /// Creates a reporter whose default callback prints `Error: <message>` via `logger`.
    pub fn new(logger: Logger) -> Self {
        let sink = logger.clone();
        Reporter {
            logger,
            on_error: Arc::new(move |_err, message| sink.error(message)),
        }
    }

    /// Replaces the error callback.
    pub fn with_on_error<F>(mut self, on_error: F) -> Self
    where
        F: Fn(Option<&(dyn StdError + 'static)>, &str) + Send + Sync + 'static,
    {
        self.on_error = Arc::new(on_error);
        self
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Passes the error and message to the callback. Does not exit.
    pub fn report(&self, err: Option<&(dyn StdError + 'static)>, message: impl fmt::Display) {
        let message = message.to_string();
        match err {
            Some(e) => tracing::debug!("Reporting error: {} ({})", message, e),
            None => tracing::debug!("Reporting error: {}", message),
        }
        (self.on_error)(err, &message);
    }

    /// Returns the `Ok` value, or reports `message` and exits with code 1.
    pub fn fail_if<T, E>(&self, result: Result<T, E>, message: impl fmt::Display) -> T
    where
        E: Into<anyhow::Error>,
    {
        match result {
            Ok(value) => value,
            Err(e) => {
                let err: anyhow::Error = e.into();
                let source: &(dyn StdError + 'static) = &*err;
                self.report(Some(source), message);
                exit::fail()
            }
        }
    }

    /// Exits with code 1 if the run recorded any error (launch failure or non-zero exit).
    pub fn fail_if_command(&self, result: &CommandResult, message: impl fmt::Display) {
        if let Some(err) = &result.error {
            let source: &(dyn StdError + 'static) = err;
            self.report(Some(source), message);
            exit::fail();
        }
    }

    /// Exits with code 1 if `path` does not exist.
    pub fn fail_if_not_exists(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        if !io::exists(path) {
            let err = YspataError::FileNotFound {
                name: path.display().to_string(),
            };
            self.report(Some(&err), &err);
            exit::fail();
        }
    }

    /// Opens an existing file for reading and writing, or exits with code 1.
    /// The file is never created or truncated.
    pub fn open(&self, path: impl AsRef<Path>) -> File {
        self.open_with(path, OpenOptions::new().read(true).write(true))
    }

    /// Opens an existing file with `options`, or exits with code 1.
    pub fn open_with(&self, path: impl AsRef<Path>, options: &OpenOptions) -> File {
        let path = path.as_ref();
        self.fail_if_not_exists(path);
        match io::open_existing(path, options) {
            Ok(file) => file,
            Err(err) => {
                let message = format!("{:#}", err);
                self.fail_if(Err::<File, _>(err), message)
            }
        }
    }
}
