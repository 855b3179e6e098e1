//! # yspata Core Infrastructure
//!
//! File: lib/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the infrastructure shared by every helper in the
//! library:
//! - `config`: TOML configuration loading and the defaults behind it
//! - `error`: the `YspataError` enum and the `Result` alias
//!
//! ```rust
//! use yspata::core::config; // For loading configuration
//! use yspata::core::error::{YspataError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
