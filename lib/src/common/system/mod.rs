//! # yspata System Utilities Module (`common::system`)
//!
//! File: lib/src/common/system/mod.rs
//!
//! ## Overview
//!
//! Host-level helpers:
//!
//! - **`platform`**: which OS and architecture the tool was built for, and the
//!   `<version>-<os>-<arch>` string used to label release artifacts.
//! - **`exit`**: the exit-code convention shared by tools built on this
//!   library (`success` exits 0, `fail` exits 1).
//!
//! ```rust
//! use yspata::common::system::platform;
//!
//! let label = platform::full_version("1.2.0");
//! assert!(label.starts_with("1.2.0-"));
//! ```
//!
pub mod exit;
pub mod platform;

pub use exit::{fail, success};
