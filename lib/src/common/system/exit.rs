//! # yspata Exit Helpers
//!
//! File: lib/src/common/system/exit.rs
//!
//! Terminate the hosting process with the library's exit-code convention.
//! These never return, so they can end any expression.
//!
use std::process;

/// Exit code used for a successful run.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code used for every fatal error reported by `Reporter`.
pub const EXIT_FAILURE: i32 = 1;

/// Terminates the process with exit code 0.
pub fn success() -> ! {
    tracing::debug!("Exiting with code {}", EXIT_SUCCESS);
    process::exit(EXIT_SUCCESS)
}

/// Terminates the process with exit code 1.
pub fn fail() -> ! {
    tracing::debug!("Exiting with code {}", EXIT_FAILURE);
    process::exit(EXIT_FAILURE)
}

/// Terminates the process with `code`, e.g. to pass a child's status through.
pub fn with_code(code: i32) -> ! {
    tracing::debug!("Exiting with code {}", code);
    process::exit(code)
}
