//! # yspata UI Utilities Module (`common::ui`)
//!
//! File: lib/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Everything the library prints for a human goes through this module.
//!
//! - **`logger`**: `Logger` and `LogLevel`. Leveled console lines (`# ...`,
//!   `Error: ...`) gated by a minimum level. The level lives in the `Logger`
//!   value, so independent loggers in one process never interfere.
//! - **`reporter`**: `Reporter`, the fail-fast layer. Reports an error through
//!   a configurable callback and terminates the process with exit code 1.
//!
//! ## Usage
//!
//! ```rust
//! use yspata::common::ui::{LogLevel, Logger, Reporter};
//!
//! let (logger, buffer) = Logger::buffered(LogLevel::Verbose);
//! logger.verbose("copying files");
//! logger.debug("not shown");
//! assert_eq!(buffer.contents(), "# copying files\n");
//!
//! let reporter = Reporter::new(logger);
//! reporter.report(None, "something went wrong");
//! assert!(buffer.contents().ends_with("Error: something went wrong\n"));
//! ```
//!
pub mod logger;
pub mod reporter;

pub use logger::{LogBuffer, LogLevel, Logger};
pub use reporter::{OnError, Reporter};
