//! # yspata Filesystem I/O Operations
//!
//! File: lib/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` and `std::path` that report failures in the
//! library's error vocabulary:
//! - **`join`**: joins path components with the platform separator.
//! - **`exists`**: true when the path can be stat'ed.
//! - **`open_existing`**: opens a file, failing with `YspataError::FileNotFound`
//!   if it is not there instead of silently creating it.
//! - **`read_file_to_string`**: reads a whole file, with the path in the error context.
//!
use crate::core::error::{Result, YspataError};
use anyhow::Context;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Joins path components in order, like repeated `Path::join`.
pub fn join<I, P>(parts: I) -> PathBuf
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    parts.into_iter().fold(PathBuf::new(), |acc, part| acc.join(part))
}

/// Returns true if `path` exists (file, directory or anything else that can be stat'ed).
///
/// Broken symlinks and paths behind unreadable directories count as missing.
pub fn exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref()).is_ok()
}

/// Opens an existing file with the given options.
///
/// # Errors
///
/// - `YspataError::FileNotFound` if the path does not exist.
/// - The underlying I/O error, with the path as context, if opening fails.
pub fn open_existing(path: impl AsRef<Path>, options: &OpenOptions) -> Result<File> {
    let path = path.as_ref();
    if !exists(path) {
        anyhow::bail!(YspataError::FileNotFound {
            name: path.display().to_string(),
        });
    }
    debug!("Opening file {:?}", path);
    options
        .open(path)
        .with_context(|| format!("Failed to open file {:?}", path))
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}
