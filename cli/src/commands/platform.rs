//! # yspata Platform Command Handler
//!
//! File: cli/src/commands/platform.rs
//!
//! Implements `yspata platform`, which prints the release label of this build
//! (`<version>-<os>-<arch>`) followed by the OS and architecture.
//!
use clap::Parser;
use yspata::common::system::platform;
use yspata::common::ui::Logger;
use yspata::core::error::Result;

/// Arguments for `yspata platform`.
#[derive(Parser, Debug)]
#[command(about = "Print the version label, operating system and architecture")]
pub struct PlatformArgs {}

pub fn handle_platform(_args: PlatformArgs, logger: &Logger) -> Result<()> {
    logger.verbose("Reporting build platform");
    logger.print_lines([
        platform::full_version(env!("CARGO_PKG_VERSION")),
        format!("os: {}", platform::OS),
        format!("arch: {}", platform::ARCH),
    ]);
    Ok(())
}
