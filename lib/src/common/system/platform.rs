//! # yspata Platform Detection
//!
//! File: lib/src/common/system/platform.rs
//!
//! Compile-time OS/arch facts, named the way Rust names them
//! (`std::env::consts`): `linux`, `macos`, `windows`; `x86_64`, `aarch64`.
//!
use std::env::consts;

/// Operating system the binary was built for.
pub const OS: &str = consts::OS;

/// CPU architecture the binary was built for.
pub const ARCH: &str = consts::ARCH;

pub fn is_mac() -> bool {
    cfg!(target_os = "macos")
}

pub fn is_linux() -> bool {
    cfg!(target_os = "linux")
}

pub fn is_windows() -> bool {
    cfg!(target_os = "windows")
}

/// Formats `<version>-<os>-<arch>`, e.g. `1.4.0-linux-x86_64`.
pub fn full_version(version: &str) -> String {
    format!("{}-{}-{}", version, OS, ARCH)
}
