//! # yspata Run Command Handler
//!
//! File: cli/src/commands/run.rs
//!
//! ## Overview
//!
//! Implements `yspata run`. The program is executed through the library's
//! `ProcessRunner`; its stdout and stderr are relayed line by line as they
//! arrive (through stream hooks) and the binary exits with the program's own
//! status.
//!
//! ## Exit Status
//!
//! - program succeeded: 0
//! - program exited with K: K (1 if it was killed by a signal)
//! - program could not be started, or `--stdin` file missing or larger than
//!   `STDIN_BUFFER_LIMIT`: 1, with an `Error: ` line
//!
//! ## Usage
//!
//! ```bash
//! yspata run -- ls -la
//! yspata run --stdin input.txt -- sort
//! ```
//!
use clap::Parser;
use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use yspata::common::process::{CommandSpec, Hooks, ProcessRunner, STDIN_BUFFER_LIMIT};
use yspata::common::system::exit;
use yspata::common::ui::Reporter;
use yspata::core::config::Config;
use yspata::core::error::{Result, YspataError};

/// Arguments for `yspata run`.
#[derive(Parser, Debug)]
#[command(
    about = "Run a program, relay its output and exit with its status",
    long_about = "Runs PROGRAM with ARGS (no shell involved), prints everything it writes to\n\
                  stdout and stderr, and exits with the program's exit status.\n\
                  Use `--` before PROGRAM when its arguments start with a dash."
)]
pub struct RunArgs {
    /// Program to execute (looked up in PATH)
    pub program: String,
    /// Arguments passed to the program unchanged
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
    /// Feed this file to the program's standard input
    #[arg(long, value_name = "PATH")]
    pub stdin: Option<PathBuf>,
}

/// Handles `yspata run`. Returns `Err` for an oversized `--stdin` file; every
/// other failure exits the process.
pub fn handle_run(args: RunArgs, config: &Config, reporter: &Reporter) -> Result<()> {
    info!("Handling run command for '{}'", args.program);
    let spec = CommandSpec::new(args.program, args.args);
    let runner = ProcessRunner::from_config(config);

    // Open and size-check before starting anything: the whole file has to fit
    // in the stdin pipe, since the program is launched only after it is written.
    let mut input = match &args.stdin {
        Some(path) => {
            let file = reporter.open_with(path, OpenOptions::new().read(true));
            let size = reporter.fail_if(
                file.metadata().map(|meta| meta.len()),
                format!("Failed to inspect input file '{}'", path.display()),
            );
            if size > STDIN_BUFFER_LIMIT {
                return Err(YspataError::InputTooLarge {
                    name: path.display().to_string(),
                    size,
                    limit: STDIN_BUFFER_LIMIT,
                }
                .into());
            }
            Some(file)
        }
        None => None,
    };

    let stdout_logger = reporter.logger().clone();
    let stderr_logger = reporter.logger().clone();
    let mut hooks = Hooks::new()
        .on_stdout(move |r: &mut dyn Read| stdout_logger.print_output(r))
        .on_stderr(move |r: &mut dyn Read| stderr_logger.print_output(r));
    if let Some(file) = input.as_mut() {
        hooks = hooks.on_stdin(move |w: &mut dyn Write| {
            if let Err(e) = io::copy(&mut *file, w) {
                warn!("Failed to copy input file to stdin: {}", e);
            }
        });
    }

    let result = runner.run(&spec, hooks);
    debug!(
        "'{}' finished: status={} stdout={}B stderr={}B",
        spec,
        result.status,
        result.stdout.len(),
        result.stderr.len()
    );

    match &result.error {
        None => Ok(()),
        Some(YspataError::NonZeroExit { status, .. }) => {
            reporter
                .logger()
                .warn(format_args!("'{}' exited with status {}", spec.program(), status));
            exit::with_code(if *status > 0 { *status } else { exit::EXIT_FAILURE })
        }
        Some(err) => {
            let source: &(dyn std::error::Error + 'static) = err;
            reporter.report(Some(source), err);
            exit::fail()
        }
    }
}
