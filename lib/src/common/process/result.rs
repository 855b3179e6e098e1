//! # Command Result
//!
//! File: lib/src/common/process/result.rs
//!
//! `CommandResult` records one execution attempt. It is filled in while the
//! run progresses and handed to the caller when the run is over.
//!
//! How to read it:
//!
//! | `error`                      | `status`                                   |
//! |------------------------------|--------------------------------------------|
//! | `None`                       | `0`, the program succeeded                 |
//! | `NonZeroExit { status, .. }` | the exit code (`-1` if killed by a signal) |
//! | anything else                | `0`, meaningless: no exit code exists      |
//!
use crate::common::process::spec::CommandSpec;
use crate::core::error::YspataError;

/// Outcome of running one `CommandSpec`.
#[derive(Debug)]
pub struct CommandResult {
    /// Program that was run.
    pub command: String,
    /// Arguments it was given.
    pub args: Vec<String>,
    /// Exit status; see the module docs for when it is meaningful.
    pub status: i32,
    /// Everything the program wrote to stdout (lossily decoded as UTF-8).
    pub stdout: String,
    /// Everything the program wrote to stderr (lossily decoded as UTF-8).
    pub stderr: String,
    /// Why the run did not succeed, if it did not.
    pub error: Option<YspataError>,
}

impl CommandResult {
    pub(crate) fn new(spec: &CommandSpec) -> Self {
        CommandResult {
            command: spec.program().to_string(),
            args: spec.args().to_vec(),
            status: 0,
            stdout: String::new(),
            stderr: String::new(),
            error: None,
        }
    }

    /// True when the program ran and exited with status 0.
    pub fn success(&self) -> bool {
        self.error.is_none()
    }

    /// The program's exit code, if it ran to completion.
    ///
    /// `None` when it could not be started or waited for.
    pub fn exit_code(&self) -> Option<i32> {
        match &self.error {
            None => Some(self.status),
            Some(YspataError::NonZeroExit { status, .. }) => Some(*status),
            Some(_) => None,
        }
    }

    /// True when the program never ran (pipe setup or launch failed).
    pub fn failed_to_start(&self) -> bool {
        self.error
            .as_ref()
            .is_some_and(YspataError::is_launch_failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn result_for(error: Option<YspataError>, status: i32) -> CommandResult {
        let mut result = CommandResult::new(&CommandSpec::new("tool", ["-x"]));
        result.error = error;
        result.status = status;
        result
    }

    #[test]
    fn test_new_copies_spec() {
        let result = CommandResult::new(&CommandSpec::new("tool", ["-x", "y"]));
        assert_eq!(result.command, "tool");
        assert_eq!(result.args, vec!["-x", "y"]);
        assert_eq!(result.status, 0);
        assert!(result.success());
    }

    #[test]
    fn test_exit_code_by_outcome() {
        assert_eq!(result_for(None, 0).exit_code(), Some(0));

        let exited = result_for(
            Some(YspataError::NonZeroExit {
                program: "tool".into(),
                status: 3,
            }),
            3,
        );
        assert_eq!(exited.exit_code(), Some(3));
        assert!(!exited.success());
        assert!(!exited.failed_to_start());

        let launch = result_for(
            Some(YspataError::Launch {
                program: "tool".into(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }),
            0,
        );
        assert_eq!(launch.exit_code(), None);
        assert!(launch.failed_to_start());
    }
}
