//! pkgq - A pkg-config query client
//!
//! This crate resolves abstract library dependency names into concrete
//! compiler/linker arguments by shelling out to the system pkg-config
//! tool and parsing its output. It locates the tool once at client
//! construction, runs existence, detail, and listing queries against
//! it, and exposes typed failure modes when the tool is absent,
//! misbehaves, or emits unparseable data.

pub mod client;
pub mod core;
pub mod util;

/// Test utilities for pkgq unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides fake registry-tool scripts so queries can
/// be exercised without a real pkg-config installation.
#[cfg(test)]
pub mod test_support;

pub use client::{PkgConfig, PkgConfigError};
pub use core::{Package, Resource};
pub use util::ClientConfig;
