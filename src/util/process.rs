//! Subprocess execution utilities.

use std::ffi::OsStr;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Interval between liveness polls while a deadline is armed.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Outcome of a failed subprocess execution.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with exit code {code:?}\n{stderr}")]
    NonZero {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("`{command}` did not finish within {limit:?} and was killed")]
    Timeout { command: String, limit: Duration },

    #[error("i/o error while running `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: io::Error,
    },
}

/// Builder for subprocess execution.
///
/// Captures stdout and stderr, and optionally enforces a wall-clock deadline;
/// a child that outlives the deadline is killed and reported as
/// [`ExecError::Timeout`].
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    timeout: Option<Duration>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    pub fn new(program: impl AsRef<Path>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args.extend(
            args.into_iter()
                .map(|s| s.as_ref().to_string_lossy().into_owned()),
        );
        self
    }

    /// Set the execution deadline. `None` waits indefinitely.
    pub fn timeout(mut self, limit: Option<Duration>) -> Self {
        self.timeout = limit;
        self
    }

    /// Get the program path.
    pub fn get_program(&self) -> &Path {
        &self.program
    }

    /// Execute the command and wait for completion, capturing output.
    pub fn exec(&self) -> Result<Output, ExecError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd.spawn().map_err(|source| ExecError::Spawn {
            program: self.program.display().to_string(),
            source,
        })?;

        // The pipes must be drained while the child runs, or a chatty
        // child deadlocks against a full pipe buffer.
        let stdout = child.stdout.take().map(drain_in_background);
        let stderr = child.stderr.take().map(drain_in_background);

        let status = self.wait(&mut child)?;

        let stdout = stdout.map(join_drained).unwrap_or_default();
        let stderr = stderr.map(join_drained).unwrap_or_default();

        Ok(Output {
            status,
            stdout,
            stderr,
        })
    }

    /// Execute and require success.
    pub fn exec_checked(&self) -> Result<Output, ExecError> {
        let output = self.exec()?;
        if !output.status.success() {
            return Err(ExecError::NonZero {
                command: self.display_command(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
            });
        }
        Ok(output)
    }

    /// Wait for the child, honouring the configured deadline.
    fn wait(&self, child: &mut Child) -> Result<ExitStatus, ExecError> {
        let Some(limit) = self.timeout else {
            return child.wait().map_err(|source| self.io_error(source));
        };

        let deadline = Instant::now() + limit;
        loop {
            match child.try_wait().map_err(|source| self.io_error(source))? {
                Some(status) => return Ok(status),
                None if Instant::now() >= deadline => {
                    // Best effort: the child may have exited in the window
                    // between the poll and the kill.
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ExecError::Timeout {
                        command: self.display_command(),
                        limit,
                    });
                }
                None => thread::sleep(POLL_INTERVAL),
            }
        }
    }

    fn io_error(&self, source: io::Error) -> ExecError {
        ExecError::Io {
            command: self.display_command(),
            source,
        }
    }

    /// Display the command for error messages.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

fn drain_in_background(mut stream: impl Read + Send + 'static) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = stream.read_to_end(&mut buf);
        buf
    })
}

fn join_drained(handle: thread::JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_default()
}

/// Find an executable in PATH.
pub fn find_executable(name: impl AsRef<OsStr>) -> Option<PathBuf> {
    which::which(name).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_captures_stdout() {
        let output = ProcessBuilder::new("echo").arg("hello").exec().unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("hello"));
    }

    #[test]
    fn test_exec_checked_surfaces_stderr() {
        let err = ProcessBuilder::new("sh")
            .args(["-c", "echo boom >&2; exit 3"])
            .exec_checked()
            .unwrap_err();

        match err {
            ExecError::NonZero { code, stderr, .. } => {
                assert_eq!(code, Some(3));
                assert!(stderr.contains("boom"));
            }
            other => panic!("expected NonZero, got {other:?}"),
        }
    }

    #[test]
    fn test_spawn_failure() {
        let err = ProcessBuilder::new("definitely-not-a-real-binary")
            .exec()
            .unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }

    #[test]
    #[cfg(unix)]
    fn test_timeout_kills_child() {
        let start = Instant::now();
        let err = ProcessBuilder::new("sleep")
            .arg("30")
            .timeout(Some(Duration::from_millis(200)))
            .exec()
            .unwrap_err();

        assert!(matches!(err, ExecError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn test_display_command() {
        let pb = ProcessBuilder::new("doxygen").args(["-w", "html", "header.html"]);

        assert_eq!(pb.display_command(), "doxygen -w html header.html");
    }
}
