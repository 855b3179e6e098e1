//! # yspata Filesystem Utilities (`common::fs`)
//!
//! File: lib/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Small filesystem helpers operating on caller-supplied paths. The library
//! itself never picks a location on disk.
//!
//! - **`io`**: `join`, `exists`, `open_existing` and `read_file_to_string`.
//!
//! The fail-fast counterparts (`fail_if_not_exists`, `open`) live on
//! `common::ui::Reporter`, since they need somewhere to report to.
//!
//! ```rust
//! use yspata::common::fs::io;
//!
//! let path = io::join(["/definitely", "not", "here.txt"]);
//! assert!(!io::exists(&path));
//! ```
//!

/// Path joining, existence checks and checked file access.
pub mod io;
