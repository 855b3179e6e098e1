//! # yspata Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point of the `yspata` binary, a thin front end over
//! the `yspata` helper library. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up diagnostic tracing based on verbosity flags
//! - Loading the optional configuration file
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - Each top-level command (`run`, `exists`, `platform`) is a variant of the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - Errors returned by handlers are reported as `Error: <message>` on stdout and exit with code 1
//!
//! ## Examples
//!
//! ```bash
//! # Run a program and print what it wrote
//! yspata run -- git status --short
//!
//! # Quiet console, verbose diagnostics on stderr
//! yspata --log-level silent -vv run -- make
//!
//! # Fail fast when a file is missing
//! yspata exists ./Cargo.toml
//! ```
//!
//! Two output channels are kept apart: console lines from the library's
//! `Logger` go to stdout, `tracing` diagnostics go to stderr.
//!
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use yspata::common::system::exit;
use yspata::common::ui::{LogLevel, Reporter};
use yspata::core::config::{self, Config};

mod commands; // Handles specific command logic (run, exists, platform)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "yspata",
    about = "Run programs, check files and inspect the platform with the yspata helpers",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase diagnostic verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Console log level: debug, verbose, warn, info or silent (overrides the config file)
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "r")]
    Run(commands::run::RunArgs),
    Exists(commands::exists::ExistsArgs),
    Platform(commands::platform::PlatformArgs),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config = load_config(&cli);
    let reporter = config.reporter();

    let command_result: anyhow::Result<()> = match cli.command {
        Commands::Run(args) => commands::run::handle_run(args, &config, &reporter),
        Commands::Exists(args) => commands::exists::handle_exists(args, &reporter),
        Commands::Platform(args) => commands::platform::handle_platform(args, reporter.logger()),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        let source: &(dyn std::error::Error + 'static) = &*e;
        reporter.report(Some(source), format!("{:#}", e));
        exit::fail();
    }
}

/// Loads `--config` (if given) and applies `--log-level` on top. Exits on a bad config file.
fn load_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => {
            // No configured reporter exists yet; report at the default level.
            let bootstrap = Reporter::default();
            let loaded = config::load_config_from_path(path);
            let message = match &loaded {
                Err(e) => format!("{:#}", e),
                Ok(_) => String::new(),
            };
            bootstrap.fail_if(loaded, message)
        }
        None => Config::default(),
    };
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    config
}
