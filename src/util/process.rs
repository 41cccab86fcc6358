//! Subprocess execution utilities.
//!
//! Registry queries always pass the package name as a discrete argv
//! entry; nothing here goes through a shell. Output capture reads each
//! pipe on its own thread so a deadline can be enforced without
//! deadlocking on a full pipe buffer.

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Interval between exit-status polls while a deadline is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Failure while running a subprocess.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to run subprocess: {0}")]
    Io(#[from] std::io::Error),

    #[error("subprocess did not finish within {0:?}")]
    TimedOut(Duration),
}

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    env: HashMap<OsString, OsString>,
    timeout: Option<Duration>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            env: HashMap::new(),
            timeout: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Set an environment variable.
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.env
            .insert(key.as_ref().to_os_string(), value.as_ref().to_os_string());
        self
    }

    /// Set a deadline for the subprocess. On expiry the child is killed.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the Command.
    fn build_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the command, capture stdout and stderr in full, and wait
    /// for completion.
    pub fn exec(&self) -> Result<Output, ExecError> {
        let mut cmd = self.build_command();
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd.spawn()?;

        let stdout_reader = child.stdout.take().map(spawn_reader);
        let stderr_reader = child.stderr.take().map(spawn_reader);

        let status = self.wait(&mut child)?;

        let stdout = stdout_reader.map(join_reader).unwrap_or_default();
        let stderr = stderr_reader.map(join_reader).unwrap_or_default();

        tracing::debug!(
            "`{}` exited with {:?}",
            self.display_command(),
            status.code()
        );

        Ok(Output {
            status,
            stdout,
            stderr,
        })
    }

    /// Execute without capturing any output and return the exit status.
    pub fn status(&self) -> Result<ExitStatus, ExecError> {
        let mut cmd = self.build_command();
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());

        let mut child = cmd.spawn()?;
        let status = self.wait(&mut child)?;

        tracing::debug!(
            "`{}` exited with {:?}",
            self.display_command(),
            status.code()
        );

        Ok(status)
    }

    /// Wait for the child, honoring the deadline if one is set.
    fn wait(&self, child: &mut Child) -> Result<ExitStatus, ExecError> {
        let Some(limit) = self.timeout else {
            return Ok(child.wait()?);
        };

        let deadline = Instant::now() + limit;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                // Kill and reap so the reader threads see EOF.
                let _ = child.kill();
                let _ = child.wait();
                return Err(ExecError::TimedOut(limit));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

fn spawn_reader<R: Read + Send + 'static>(mut source: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = source.read_to_end(&mut buf);
        buf
    })
}

fn join_reader(handle: JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_default()
}
