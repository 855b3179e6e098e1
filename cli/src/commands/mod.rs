//! # yspata Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per top-level subcommand. Each exposes a Clap `*Args` struct
//! and a `handle_*` function returning `yspata::Result<()>`; `main.rs` routes
//! to them and reports any error.
//!

/// `yspata run`: execute a program through the process runner and relay its output and exit status.
pub mod run;
/// `yspata exists`: fail fast when a file is missing.
pub mod exists;
/// `yspata platform`: print the version label, OS and architecture.
pub mod platform;
