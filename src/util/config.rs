//! Client configuration.
//!
//! A `ClientConfig` is plain data handed to `PkgConfig::new`. The
//! defaults reproduce the conventional environment this client was
//! built against: the tool at `/usr/bin/pkg-config`, exit status 0
//! meaning success, and no deadline on invocations.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Default registry tool location when no override is given.
pub const DEFAULT_TOOL_PATH: &str = "/usr/bin/pkg-config";

/// Environment variable consulted by `PkgConfig::from_environment` for
/// a tool path override.
pub const TOOL_PATH_ENV: &str = "PKGQ_PKG_CONFIG";

/// Settings for constructing a `PkgConfig` client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Explicit path to the registry tool; when unset the fixed default
    /// location is probed instead
    pub path: Option<PathBuf>,

    /// Value for `PKG_CONFIG_PATH` on every invocation
    pub search_path: Option<OsString>,

    /// Deadline applied to each subprocess; `None` means wait forever
    pub timeout: Option<Duration>,

    /// Exit status the tool uses to signal success. The 0-means-success
    /// convention is environment-specific, so it is configurable here.
    pub success_code: i32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            path: None,
            search_path: None,
            timeout: None,
            success_code: 0,
        }
    }
}

impl ClientConfig {
    /// Config with an explicit tool path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        ClientConfig {
            path: Some(path.into()),
            ..ClientConfig::default()
        }
    }
}
