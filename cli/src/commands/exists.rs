//! # yspata Exists Command Handler
//!
//! File: cli/src/commands/exists.rs
//!
//! Implements `yspata exists <PATH>`: prints `File '<PATH>' is found`, or
//! reports `Error: File '<PATH>' is not found` and exits with code 1.
//!
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use yspata::common::ui::Reporter;
use yspata::core::error::Result;

/// Arguments for `yspata exists`.
#[derive(Parser, Debug)]
#[command(about = "Check that a file exists, failing with exit code 1 if it does not")]
pub struct ExistsArgs {
    /// Path to check
    pub path: PathBuf,
}

pub fn handle_exists(args: ExistsArgs, reporter: &Reporter) -> Result<()> {
    info!("Checking existence of {:?}", args.path);
    reporter.fail_if_not_exists(&args.path);
    reporter
        .logger()
        .printf(format_args!("File '{}' is found", args.path.display()));
    Ok(())
}
