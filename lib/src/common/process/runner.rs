//! # Process Runner
//!
//! File: lib/src/common/process/runner.rs
//!
//! ## Overview
//!
//! `ProcessRunner` executes one `CommandSpec` in two phases.
//!
//! **Start** (`ProcessRunner::start`):
//! 1. Echo the command line at Info level (unless disabled).
//! 2. If an input hook is present, create the stdin pipe, call the hook with
//!    the write end and close it when the hook returns. Without a hook the
//!    child's stdin is `/dev/null`-like: immediately at end-of-input.
//! 3. Create the stdout and stderr pipes.
//!
//! A pipe that cannot be created ends the run with `YspataError::PipeSetup`
//! and no process is ever launched.
//!
//! **Wait** (`Started::wait`):
//! 1. Launch the program (`YspataError::Launch` on failure, status stays 0).
//! 2. Drain stdout and stderr on two scoped threads. Each drain tees the pipe
//!    into a buffer and, if registered, into the stream's hook; after the hook
//!    returns the drain reads whatever is left, so capture is always complete.
//! 3. Wait for the program to exit, then join both drains before returning.
//!    Captured text is final by the time the caller sees the result.
//! 4. A non-zero exit becomes `YspataError::NonZeroExit` with `status` set.
//!
//! ## Limitations
//!
//! The input hook runs before the child exists, so its writes sit in the OS
//! pipe buffer. Input larger than the pipe capacity (`STDIN_BUFFER_LIMIT`)
//! blocks the hook. Nothing here times out or kills the child.
//!
use std::io::{self, PipeReader, Read};
use std::panic;
use std::process::{Command, ExitStatus, Stdio};
use std::thread;

use tracing::{debug, warn};

use crate::common::process::hooks::{Hooks, OutputHook, Stream};
use crate::common::process::result::CommandResult;
use crate::common::process::spec::CommandSpec;
use crate::common::ui::logger::Logger;
use crate::core::config::Config;
use crate::core::error::YspataError;

/// Bytes an input hook can write before the stdin pipe is full.
#[cfg(target_os = "linux")]
pub const STDIN_BUFFER_LIMIT: u64 = 64 * 1024;
/// Bytes an input hook can write before the stdin pipe is full.
#[cfg(not(target_os = "linux"))]
pub const STDIN_BUFFER_LIMIT: u64 = 16 * 1024;

/// Runs external programs, echoing each command line through a `Logger`.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    logger: Logger,
    echo_commands: bool,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        ProcessRunner::new(Logger::default())
    }
}

impl ProcessRunner {
    pub fn new(logger: Logger) -> Self {
        ProcessRunner {
            logger,
            echo_commands: true,
        }
    }

    /// Builds a runner from the `[log]` and `[process]` sections of `config`.
    pub fn from_config(config: &Config) -> Self {
        ProcessRunner::new(config.logger()).with_echo_commands(config.process.echo_commands)
    }

    /// Whether `start` logs `program args...` at Info level. On by default.
    pub fn with_echo_commands(mut self, echo: bool) -> Self {
        self.echo_commands = echo;
        self
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Runs `spec` to completion: `start`, then `wait` unless `start` already failed.
    pub fn run(&self, spec: &CommandSpec, hooks: Hooks<'_>) -> CommandResult {
        let started = self.start(spec, hooks);
        if started.result().error.is_some() {
            return started.into_result();
        }
        started.wait()
    }

    /// Phase one: set up pipes and feed stdin. The program is not launched yet.
    ///
    /// Check `Started::result().error` for a setup failure, or just call
    /// `Started::wait`, which returns the failed result unchanged.
    pub fn start<'a>(&self, spec: &CommandSpec, hooks: Hooks<'a>) -> Started<'a> {
        if self.echo_commands {
            self.logger.info(spec);
        }
        let result = CommandResult::new(spec);
        let Hooks {
            stdin: stdin_hook,
            stdout: stdout_hook,
            stderr: stderr_hook,
        } = hooks;

        let mut command = Command::new(spec.program());
        command.args(spec.args());

        match stdin_hook {
            Some(mut hook) => {
                let (reader, mut writer) = match io::pipe() {
                    Ok(pipe) => pipe,
                    Err(source) => return Started::failed(result, Stream::Stdin, source),
                };
                debug!("Feeding stdin of '{}' through input hook", spec.program());
                hook.produce(&mut writer);
                // Closing the write end is what gives the child its end-of-input.
                drop(writer);
                command.stdin(Stdio::from(reader));
            }
            None => {
                command.stdin(Stdio::null());
            }
        }

        let (stdout, stdout_writer) = match io::pipe() {
            Ok(pipe) => pipe,
            Err(source) => return Started::failed(result, Stream::Stdout, source),
        };
        command.stdout(Stdio::from(stdout_writer));

        let (stderr, stderr_writer) = match io::pipe() {
            Ok(pipe) => pipe,
            Err(source) => return Started::failed(result, Stream::Stderr, source),
        };
        command.stderr(Stdio::from(stderr_writer));

        Started {
            result,
            pending: Some(Pending {
                command,
                stdout: Drain::new(Stream::Stdout, stdout, stdout_hook),
                stderr: Drain::new(Stream::Stderr, stderr, stderr_hook),
            }),
        }
    }
}

/// A run between its two phases, returned by `ProcessRunner::start`.
pub struct Started<'a> {
    result: CommandResult,
    pending: Option<Pending<'a>>,
}

/// Everything `wait` needs once `start` succeeded.
struct Pending<'a> {
    command: Command,
    stdout: Drain<'a>,
    stderr: Drain<'a>,
}

impl<'a> Started<'a> {
    fn failed(mut result: CommandResult, stream: Stream, source: io::Error) -> Self {
        warn!("Failed to create {} pipe for '{}': {}", stream, result.command, source);
        result.error = Some(YspataError::PipeSetup { stream, source });
        Started {
            result,
            pending: None,
        }
    }

    /// The result so far. After a successful start it only holds the command and args.
    pub fn result(&self) -> &CommandResult {
        &self.result
    }

    /// Abandons the run without launching the program.
    pub fn into_result(self) -> CommandResult {
        self.result
    }

    /// Phase two: launch, drain both output streams, wait for exit.
    ///
    /// Both drain threads are joined before this returns. A panic inside an
    /// output hook is resumed on the calling thread.
    pub fn wait(self) -> CommandResult {
        let Started {
            mut result,
            pending,
        } = self;
        let Some(Pending {
            mut command,
            stdout,
            stderr,
        }) = pending
        else {
            return result;
        };

        let spawned = command.spawn();
        // `Command` keeps our copies of the stdout/stderr write ends; they must
        // be closed or the drains never reach end-of-stream.
        drop(command);
        let mut child = match spawned {
            Ok(child) => child,
            Err(source) => {
                warn!("Failed to launch '{}': {}", result.command, source);
                result.error = Some(YspataError::Launch {
                    program: result.command.clone(),
                    source,
                });
                return result;
            }
        };
        debug!("Launched '{}' as pid {}", result.command, child.id());

        let (status, stdout, stderr) = thread::scope(|scope| {
            let stdout_task = scope.spawn(move || stdout.run());
            let stderr_task = scope.spawn(move || stderr.run());
            let status = child.wait();
            let stdout = stdout_task
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload));
            let stderr = stderr_task
                .join()
                .unwrap_or_else(|payload| panic::resume_unwind(payload));
            (status, stdout, stderr)
        });

        result.stdout = String::from_utf8_lossy(&stdout).into_owned();
        result.stderr = String::from_utf8_lossy(&stderr).into_owned();
        record_exit(&mut result, status);
        result
    }
}

fn record_exit(result: &mut CommandResult, status: io::Result<ExitStatus>) {
    match status {
        Ok(status) if status.success() => {
            debug!("'{}' exited successfully", result.command);
        }
        Ok(status) => {
            // No code means the child was killed by a signal.
            let code = status.code().unwrap_or(-1);
            debug!("'{}' exited with {}", result.command, status);
            result.status = code;
            result.error = Some(YspataError::NonZeroExit {
                program: result.command.clone(),
                status: code,
            });
        }
        Err(source) => {
            warn!("Failed to wait for '{}': {}", result.command, source);
            result.error = Some(YspataError::Wait {
                program: result.command.clone(),
                source,
            });
        }
    }
}

/// Reads one output pipe to end-of-stream, capturing every byte.
struct Drain<'a> {
    stream: Stream,
    pipe: PipeReader,
    hook: Option<Box<dyn OutputHook + 'a>>,
}

impl<'a> Drain<'a> {
    fn new(stream: Stream, pipe: PipeReader, hook: Option<Box<dyn OutputHook + 'a>>) -> Self {
        Drain { stream, pipe, hook }
    }

    fn run(self) -> Vec<u8> {
        let Drain {
            stream,
            mut pipe,
            hook,
        } = self;
        let mut captured = Vec::new();
        let mut tee = TeeReader {
            inner: &mut pipe,
            captured: &mut captured,
        };
        if let Some(mut hook) = hook {
            hook.consume(&mut tee);
        }
        if let Err(e) = io::copy(&mut tee, &mut io::sink()) {
            warn!("Stopped draining {} after read error: {}", stream, e);
        }
        debug!("Drained {} bytes from {}", captured.len(), stream);
        captured
    }
}

/// Reader that appends everything it reads to `captured`.
struct TeeReader<'b, R: Read> {
    inner: R,
    captured: &'b mut Vec<u8>,
}

impl<R: Read> Read for TeeReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.captured.extend_from_slice(&buf[..n]);
        Ok(n)
    }
}
