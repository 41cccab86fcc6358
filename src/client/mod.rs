//! The registry query client.
//!
//! `PkgConfig` locates the registry tool once at construction and runs
//! `--exists`, per-package detail, and `--list-all` queries against it.
//! Every query spawns exactly one subprocess per invocation, blocks the
//! calling thread until it exits, and parses the captured output into
//! the core model. The cached executable path is read-only after
//! construction, so a client can be shared freely across threads.

pub mod errors;

use std::path::{Path, PathBuf};

use crate::core::{Package, Resource};
use crate::util::config::{ClientConfig, DEFAULT_TOOL_PATH, TOOL_PATH_ENV};
use crate::util::process::{ExecError, ProcessBuilder};

pub use errors::PkgConfigError;

/// Client for the system package-metadata registry.
#[derive(Debug, Clone)]
pub struct PkgConfig {
    config: ClientConfig,
    executable: Option<PathBuf>,
}

impl PkgConfig {
    /// Construct a client, probing for the registry tool exactly once.
    ///
    /// The explicit `config.path` override wins; otherwise the fixed
    /// default location is probed. A candidate is accepted only if it
    /// is an executable file. An absent tool is not an error here —
    /// queries on the resulting client fail with `ServiceNotAvailable`.
    pub fn new(config: ClientConfig) -> Self {
        let candidate = config
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOL_PATH));

        let executable = if is_executable(&candidate) {
            tracing::debug!("using registry tool at {}", candidate.display());
            Some(candidate)
        } else {
            tracing::debug!("no registry tool at {}", candidate.display());
            None
        };

        PkgConfig { config, executable }
    }

    /// Construct a client from the environment, honoring the
    /// `PKGQ_PKG_CONFIG` path override.
    pub fn from_environment() -> Self {
        PkgConfig::new(ClientConfig {
            path: std::env::var_os(TOOL_PATH_ENV).map(PathBuf::from),
            ..ClientConfig::default()
        })
    }

    /// Construct a client by searching `PATH` for `pkg-config`, then
    /// `pkgconf`. Opt-in alternative to the fixed-location probe.
    pub fn discover() -> Self {
        let path = ["pkg-config", "pkgconf"]
            .iter()
            .find_map(|tool| which::which(tool).ok());

        PkgConfig::new(ClientConfig {
            path,
            ..ClientConfig::default()
        })
    }

    /// Whether a usable registry tool was found at construction.
    ///
    /// O(1) read of the cached probe result; never re-probes.
    pub fn is_available(&self) -> bool {
        self.executable.is_some()
    }

    /// Path of the registry tool, if one was found.
    pub fn executable(&self) -> Option<&Path> {
        self.executable.as_deref()
    }

    /// Check whether a package is registered.
    ///
    /// Maps the tool's exit status straight to a boolean: the configured
    /// success status means "exists", anything else means "does not
    /// exist". "Tool said no" and "tool errored" deliberately fold into
    /// `false` here.
    pub fn package_exists(&self, name: &str) -> Result<bool, PkgConfigError> {
        let builder = self.builder(&["--exists", name])?;
        let command = builder.display_command();

        let status = builder.status().map_err(|e| self.exec_error(command, e))?;
        Ok(status.code() == Some(self.config.success_code))
    }

    /// Resolve the full metadata for one package, or `None` if the name
    /// is unknown to the registry.
    ///
    /// The tool does not return all fields from one invocation, so one
    /// coherent `Package` is assembled from several: the flag queries,
    /// the provides/requires queries, and a listing pass for the
    /// description.
    pub fn describe_package(&self, name: &str) -> Result<Option<Package>, PkgConfigError> {
        if !self.package_exists(name)? {
            return Ok(None);
        }

        let cflags = self.capture(&["--cflags", name])?.trim().to_string();
        let lflags = self.capture(&["--libs", name])?.trim().to_string();
        let provides = Resource::parse_list(&self.capture(&["--print-provides", name])?);
        let requires = Resource::parse_list(&self.capture(&["--print-requires", name])?);

        // The tool has no per-package description query; it only shows
        // descriptions in the bulk listing.
        let description = self
            .list_available_packages()?
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.description)
            .unwrap_or_default();

        Ok(Some(Package {
            name: name.to_string(),
            description,
            provides,
            requires,
            cflags,
            lflags,
        }))
    }

    /// List every registered package as name and description.
    ///
    /// Listing returns name and description only; `provides`,
    /// `requires`, and the flag strings stay at their empty defaults.
    /// Full detail needs a follow-up `describe_package` per name.
    pub fn list_available_packages(&self) -> Result<Vec<Package>, PkgConfigError> {
        let text = self.capture(&["--list-all"])?;
        Ok(Package::parse_listing(&text))
    }

    /// Build an invocation, short-circuiting with `ServiceNotAvailable`
    /// before anything is spawned.
    fn builder(&self, args: &[&str]) -> Result<ProcessBuilder, PkgConfigError> {
        let executable = self
            .executable
            .as_ref()
            .ok_or(PkgConfigError::ServiceNotAvailable)?;

        let mut builder = ProcessBuilder::new(executable)
            .args(args)
            .timeout(self.config.timeout);

        if let Some(search_path) = &self.config.search_path {
            builder = builder.env("PKG_CONFIG_PATH", search_path);
        }

        Ok(builder)
    }

    /// Run an invocation, require a successful exit, and decode stdout
    /// as UTF-8.
    fn capture(&self, args: &[&str]) -> Result<String, PkgConfigError> {
        let builder = self.builder(args)?;
        let command = builder.display_command();

        let output = builder
            .exec()
            .map_err(|e| self.exec_error(command.clone(), e))?;

        if output.status.code() != Some(self.config.success_code) {
            return Err(PkgConfigError::CommandExecutionFailed {
                command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| PkgConfigError::ParsingCommandOutput {
            command,
            reason: "output is not valid UTF-8".to_string(),
        })
    }

    fn exec_error(&self, command: String, err: ExecError) -> PkgConfigError {
        match err {
            ExecError::TimedOut(timeout) => PkgConfigError::TimedOut { command, timeout },
            ExecError::Io(e) => PkgConfigError::CommandExecutionFailed {
                command,
                code: None,
                stderr: e.to_string(),
            },
        }
    }
}

/// Probe for an executable file.
#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable_client() -> PkgConfig {
        PkgConfig::new(ClientConfig::with_path("/nonexistent/pkg-config"))
    }

    #[test]
    fn test_unavailable_client_reports_unavailable() {
        let client = unavailable_client();
        assert!(!client.is_available());
        assert!(client.executable().is_none());
    }

    #[test]
    fn test_unavailable_client_fails_every_query() {
        let client = unavailable_client();

        assert!(matches!(
            client.package_exists("zlib"),
            Err(PkgConfigError::ServiceNotAvailable)
        ));
        assert!(matches!(
            client.describe_package("zlib"),
            Err(PkgConfigError::ServiceNotAvailable)
        ));
        assert!(matches!(
            client.list_available_packages(),
            Err(PkgConfigError::ServiceNotAvailable)
        ));
    }

    #[cfg(unix)]
    mod with_fake_tool {
        use super::*;
        use crate::test_support::{fake_tool, FAKE_REGISTRY_SCRIPT};
        use std::time::Duration;

        fn client(tool: &Path) -> PkgConfig {
            PkgConfig::new(ClientConfig::with_path(tool))
        }

        #[test]
        fn test_probe_accepts_executable_file() {
            let tmp = tempfile::TempDir::new().unwrap();
            let tool = fake_tool(tmp.path(), FAKE_REGISTRY_SCRIPT);

            assert!(client(&tool).is_available());
        }

        #[test]
        fn test_probe_rejects_non_executable_file() {
            let tmp = tempfile::TempDir::new().unwrap();
            let path = tmp.path().join("pkg-config");
            std::fs::write(&path, "not a tool").unwrap();

            assert!(!client(&path).is_available());
        }

        #[test]
        fn test_package_exists_maps_exit_status() {
            let tmp = tempfile::TempDir::new().unwrap();
            let tool = fake_tool(tmp.path(), FAKE_REGISTRY_SCRIPT);
            let client = client(&tool);

            assert!(client.package_exists("alpha").unwrap());
            assert!(!client.package_exists("missing").unwrap());
        }

        #[test]
        fn test_exists_never_fails_on_tool_error() {
            // Tool that always exits 2, as if it errored internally.
            let tmp = tempfile::TempDir::new().unwrap();
            let tool = fake_tool(tmp.path(), "#!/bin/sh\nexit 2\n");

            assert!(!client(&tool).package_exists("anything").unwrap());
        }

        #[test]
        fn test_list_available_packages() {
            let tmp = tempfile::TempDir::new().unwrap();
            let tool = fake_tool(tmp.path(), FAKE_REGISTRY_SCRIPT);

            let packages = client(&tool).list_available_packages().unwrap();
            assert_eq!(packages.len(), 2);
            assert_eq!(packages[0].name, "alpha");
            assert_eq!(packages[0].description, "A description");
            assert_eq!(packages[1].name, "beta");
            assert_eq!(packages[1].description, "");
        }

        #[test]
        fn test_describe_package_assembles_full_record() {
            let tmp = tempfile::TempDir::new().unwrap();
            let tool = fake_tool(tmp.path(), FAKE_REGISTRY_SCRIPT);

            let pkg = client(&tool).describe_package("alpha").unwrap().unwrap();
            assert_eq!(pkg.name, "alpha");
            assert_eq!(pkg.description, "A description");
            assert_eq!(pkg.cflags, "-I/usr/include/alpha");
            assert_eq!(pkg.lflags, "-lalpha");
            assert_eq!(pkg.provides.len(), 1);
            assert_eq!(pkg.provides[0].package, "alpha");
            assert_eq!(pkg.provides[0].version, "1.2.0");
            assert_eq!(pkg.requires.len(), 2);
            assert_eq!(pkg.requires[0].package, "beta");
            assert_eq!(pkg.requires[0].version, "0.9");
            assert_eq!(pkg.requires[1].package, "gamma");
            assert_eq!(pkg.requires[1].version, "");
        }

        #[test]
        fn test_describe_unknown_package_is_none() {
            let tmp = tempfile::TempDir::new().unwrap();
            let tool = fake_tool(tmp.path(), FAKE_REGISTRY_SCRIPT);

            assert!(client(&tool).describe_package("missing").unwrap().is_none());
        }

        #[test]
        fn test_listing_failure_is_command_execution_failed() {
            let tmp = tempfile::TempDir::new().unwrap();
            let tool = fake_tool(tmp.path(), "#!/bin/sh\nexit 3\n");

            let err = client(&tool).list_available_packages().unwrap_err();
            match err {
                PkgConfigError::CommandExecutionFailed { code, .. } => {
                    assert_eq!(code, Some(3));
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }

        #[test]
        fn test_non_utf8_output_is_parse_error() {
            // \374 is a lone Latin-1 byte, invalid as UTF-8.
            let tmp = tempfile::TempDir::new().unwrap();
            let tool = fake_tool(tmp.path(), "#!/bin/sh\nprintf 'alpha \\374\\n'\n");

            let err = client(&tool).list_available_packages().unwrap_err();
            assert!(matches!(err, PkgConfigError::ParsingCommandOutput { .. }));
        }

        #[test]
        fn test_deadline_surfaces_as_timed_out() {
            let tmp = tempfile::TempDir::new().unwrap();
            let tool = fake_tool(tmp.path(), "#!/bin/sh\nsleep 10\n");

            let mut config = ClientConfig::with_path(&tool);
            config.timeout = Some(Duration::from_millis(100));
            let client = PkgConfig::new(config);

            let err = client.list_available_packages().unwrap_err();
            assert!(matches!(err, PkgConfigError::TimedOut { .. }));
        }
    }
}
