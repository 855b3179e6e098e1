//! # yspata Error Types
//!
//! File: lib/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the library.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `YspataError`: A custom error enum using `thiserror` for the specific failures
//!   callers may want to match on
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The process runner keeps its failure modes apart so callers can tell them apart:
//! - `PipeSetup`: a pipe could not be created, the process never existed
//! - `Launch`: the OS refused to start the program (missing binary, permissions)
//! - `Wait`: the process started but waiting for it failed
//! - `NonZeroExit`: the program ran to completion and reported failure
//!
//! ## Examples
//!
//! ```rust
//! use yspata::{CommandSpec, Hooks, Logger, ProcessRunner, YspataError};
//!
//! let runner = ProcessRunner::new(Logger::silent());
//! let result = runner.run(&CommandSpec::new("/nonexistent/binary", Vec::<String>::new()), Hooks::new());
//! assert!(matches!(result.error, Some(YspataError::Launch { .. })));
//! ```
//!
use crate::common::process::Stream;
use std::io;
use thiserror::Error;

/// Custom error type for the yspata library.
#[derive(Error, Debug)]
pub enum YspataError {
    #[error("Failed to create {stream} pipe: {source}")]
    PipeSetup {
        stream: Stream,
        #[source]
        source: io::Error,
    },

    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to wait for '{program}': {source}")]
    Wait {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("'{program}' exited with status {status}")]
    NonZeroExit { program: String, status: i32 },

    #[error("File '{name}' is not found")]
    FileNotFound { name: String },

    #[error("Input file '{name}' is {size} bytes, larger than the {limit}-byte stdin pipe buffer")]
    InputTooLarge { name: String, size: u64, limit: u64 },

    #[error("Command line is empty")]
    EmptyCommand,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl YspataError {
    /// True for failures where the program never ran (pipe setup or launch).
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, Self::PipeSetup { .. } | Self::Launch { .. })
    }
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let missing = YspataError::FileNotFound {
            name: "config.toml".into(),
        };
        assert_eq!(missing.to_string(), "File 'config.toml' is not found");

        let exit = YspataError::NonZeroExit {
            program: "false".into(),
            status: 1,
        };
        assert_eq!(exit.to_string(), "'false' exited with status 1");

        let pipe = YspataError::PipeSetup {
            stream: Stream::Stdout,
            source: io::Error::other("too many open files"),
        };
        assert_eq!(
            pipe.to_string(),
            "Failed to create stdout pipe: too many open files"
        );
    }

    #[test]
    fn test_launch_failure_classification() {
        let launch = YspataError::Launch {
            program: "nope".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(launch.is_launch_failure());

        let exit = YspataError::NonZeroExit {
            program: "false".into(),
            status: 1,
        };
        assert!(!exit.is_launch_failure());
    }

    #[test]
    fn test_input_too_large_display() {
        let err = YspataError::InputTooLarge {
            name: "big.txt".into(),
            size: 200_000,
            limit: 65_536,
        };
        assert_eq!(
            err.to_string(),
            "Input file 'big.txt' is 200000 bytes, larger than the 65536-byte stdin pipe buffer"
        );
        assert!(!err.is_launch_failure());
    }
}
