//! # yspata Console Logger
//!
//! File: lib/src/common/ui/logger.rs
//!
//! ## Overview
//!
//! `Logger` writes the user-facing lines of a command-line tool: progress
//! notes, warnings and errors. It is deliberately separate from `tracing`,
//! which carries diagnostics to stderr; these lines are part of the tool's
//! output and go to stdout.
//!
//! ## Line Format
//!
//! - `debug`, `verbose`, `warn`, `info`: `# <message>`, printed only when the
//!   message level is at or above the logger's level.
//! - `error`: `Error: <message>`, always printed.
//! - `printf`, `print_lines`, `print_output`: the text as-is, always printed.
//!
//! Levels are ordered `Debug < Verbose < Warn < Info < Silent`. A logger at
//! `Silent` suppresses every leveled line. The default level is `Info`.
//!
use serde::Deserialize;
use std::fmt;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::error::YspataError;

/// Minimum level of the lines a `Logger` prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Verbose,
    Warn,
    #[default]
    Info,
    Silent,
}

impl LogLevel {
    /// All levels, lowest first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Verbose,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Silent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Verbose => "verbose",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Silent => "silent",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = YspataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                YspataError::Config(format!(
                    "Unknown log level '{}'. Expected one of: debug, verbose, warn, info, silent.",
                    s
                ))
            })
    }
}

type Sink = Arc<Mutex<Box<dyn Write + Send>>>;

/// Leveled console writer.
///
/// Cloning a `Logger` shares the output sink but not the level: a clone can be
/// re-leveled with `set_level` without affecting the original.
#[derive(Clone)]
pub struct Logger {
    level: LogLevel,
    sink: Sink,
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(LogLevel::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Creates a logger writing to stdout.
    pub fn new(level: LogLevel) -> Self {
        Logger::with_writer(level, io::stdout())
    }

    /// Creates a logger at `Silent` writing to stdout. Errors and plain lines still print.
    pub fn silent() -> Self {
        Logger::new(LogLevel::Silent)
    }

    /// Creates a logger writing to an arbitrary sink.
    pub fn with_writer(level: LogLevel, writer: impl Write + Send + 'static) -> Self {
        Logger {
            level,
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Creates a logger writing into memory, plus a handle to read what was written.
    pub fn buffered(level: LogLevel) -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        (Logger::with_writer(level, buffer.clone()), buffer)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn set_level(&mut self, level: LogLevel) {
        self.level = level;
    }

    /// Whether a message at `level` would be printed.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Silent && level >= self.level
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.leveled(LogLevel::Debug, message);
    }

    pub fn verbose(&self, message: impl fmt::Display) {
        self.leveled(LogLevel::Verbose, message);
    }

    pub fn warn(&self, message: impl fmt::Display) {
        self.leveled(LogLevel::Warn, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.leveled(LogLevel::Info, message);
    }

    /// Prints `Error: <message>` regardless of level.
    pub fn error(&self, message: impl fmt::Display) {
        self.write_line(format_args!("Error: {}", message));
    }

    /// Prints the message as a plain line regardless of level.
    pub fn printf(&self, message: impl fmt::Display) {
        self.write_line(format_args!("{}", message));
    }

    /// Prints each item on its own line.
    pub fn print_lines<I, S>(&self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: fmt::Display,
    {
        let mut sink = self.lock();
        for line in lines {
            let _ = writeln!(sink, "{}", line);
        }
        let _ = sink.flush();
    }

    /// Prints a stream line by line until end-of-stream.
    ///
    /// Line endings (`\n` or `\r\n`) are normalized; invalid UTF-8 is replaced.
    /// Fits directly as a stdout/stderr hook of the process runner.
    pub fn print_output(&self, reader: &mut dyn Read) {
        let mut reader = BufReader::new(reader);
        let mut line = Vec::new();
        loop {
            line.clear();
            match reader.read_until(b'\n', &mut line) {
                Ok(0) => break,
                Ok(_) => {
                    if line.ends_with(b"\n") {
                        line.pop();
                        if line.ends_with(b"\r") {
                            line.pop();
                        }
                    }
                    self.printf(String::from_utf8_lossy(&line));
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!("Stopped printing output after read error: {}", e);
                    break;
                }
            }
        }
    }

    fn leveled(&self, level: LogLevel, message: impl fmt::Display) {
        if self.enabled(level) {
            self.write_line(format_args!("# {}", message));
        }
    }

    fn write_line(&self, line: fmt::Arguments<'_>) {
        let mut sink = self.lock();
        // Console output is best effort; a closed stdout must not take the tool down.
        let _ = writeln!(sink, "{}", line);
        let _ = sink.flush();
    }

    fn lock(&self) -> MutexGuard<'_, Box<dyn Write + Send>> {
        self.sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// In-memory sink returned by [`Logger::buffered`].
#[derive(Clone, Default, Debug)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Everything written so far, lossily decoded.
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(|p| p.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
