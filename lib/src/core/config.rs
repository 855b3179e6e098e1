//! # yspata Configuration System
//!
//! File: lib/src/core/config.rs
//!
//! ## Overview
//!
//! Tools built on this library can describe their logging and process
//! settings in a TOML file. The library never looks for that file on its own:
//! the caller supplies the path (for example from a `--config` flag), and
//! every section and field is optional.
//!
//! ```toml
//! [log]
//! level = "verbose"      # debug | verbose | warn | info | silent
//!
//! [process]
//! echo_commands = false  # don't log "<program> <args>" before each run
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use yspata::core::config::Config;
//! use yspata::common::ui::LogLevel;
//!
//! let cfg = Config::from_toml_str("[log]\nlevel = \"warn\"\n")?;
//! assert_eq!(cfg.log.level, LogLevel::Warn);
//! assert!(cfg.process.echo_commands);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
use crate::common::fs::io;
use crate::common::ui::{LogLevel, Logger, Reporter};
use crate::core::error::{Result, YspataError};
use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Top-level configuration, loaded from TOML.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub process: ProcessConfig,
}

/// Console logging settings (`[log]`).
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Minimum level printed by the `Logger`.
    #[serde(default)]
    pub level: LogLevel,
}

/// Process runner settings (`[process]`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProcessConfig {
    /// Log each command line at Info level before running it.
    #[serde(default = "default_echo_commands")]
    pub echo_commands: bool,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        ProcessConfig {
            echo_commands: default_echo_commands(),
        }
    }
}

fn default_echo_commands() -> bool {
    true
}

impl Config {
    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).context("Failed to parse configuration TOML")?;
        debug!("Parsed configuration: {:?}", config);
        Ok(config)
    }

    /// A stdout `Logger` at the configured level.
    pub fn logger(&self) -> Logger {
        Logger::new(self.log.level)
    }

    /// A `Reporter` printing through `self.logger()`.
    pub fn reporter(&self) -> Reporter {
        Reporter::new(self.logger())
    }
}

/// Loads configuration from a caller-supplied TOML file.
///
/// # Errors
///
/// - `YspataError::FileNotFound` if `path` does not exist.
/// - A read or parse error with the path as context.
pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    if !io::exists(path) {
        anyhow::bail!(YspataError::FileNotFound {
            name: path.display().to_string(),
        });
    }
    info!("Loading configuration from: {}", path.display());
    let content = io::read_file_to_string(path)?;
    Config::from_toml_str(&content)
        .with_context(|| format!("Invalid configuration file: {}", path.display()))
}
