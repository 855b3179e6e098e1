//! # Command Specification
//!
//! File: lib/src/common/process/spec.rs
//!
//! `CommandSpec` is what to run: a program name and its arguments, passed to
//! the OS as discrete argv elements. No shell is involved, so quoting and
//! metacharacters in arguments are never interpreted.
//!
use crate::core::error::YspataError;
use std::fmt;

/// Program name plus ordered arguments. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Stores `program` and `args` as given; nothing is validated or resolved.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Splits a command line on whitespace: the first word is the program,
    /// the rest are arguments. No quoting rules apply.
    ///
    /// # Errors
    ///
    /// `YspataError::EmptyCommand` if the line has no words.
    pub fn from_line(line: &str) -> Result<Self, YspataError> {
        let mut words = line.split_whitespace();
        let program = words.next().ok_or(YspataError::EmptyCommand)?;
        Ok(CommandSpec::new(program, words))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// `program arg1 arg2`, as echoed in logs.
impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
