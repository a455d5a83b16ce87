//! Locating and invoking the doxygen executable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use miette::Diagnostic;
use thiserror::Error;

use crate::util::process::{find_executable, ProcessBuilder};

/// Raised when no usable doxygen executable can be located.
#[derive(Debug, Error, Diagnostic)]
#[error("doxygen executable not found")]
#[diagnostic(
    code(doxsuite::doxygen::not_found),
    help("Install doxygen and ensure it is on PATH, or set the DOXYGEN environment variable to the executable")
)]
pub struct DoxygenNotFound;

/// Handle to a located doxygen executable.
///
/// Both invocation modes block until the tool exits; the configured
/// deadline bounds each invocation so a hung tool cannot stall the whole
/// suite build forever.
#[derive(Debug, Clone)]
pub struct Doxygen {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl Doxygen {
    /// Locate doxygen: the DOXYGEN environment variable wins, then PATH.
    pub fn locate() -> Result<Doxygen, DoxygenNotFound> {
        if let Ok(exe) = std::env::var("DOXYGEN") {
            if let Some(program) = find_executable(&exe) {
                return Ok(Doxygen::at(program));
            }
        }

        find_executable("doxygen")
            .map(Doxygen::at)
            .ok_or(DoxygenNotFound)
    }

    /// Use a known executable path directly.
    pub fn at(program: impl Into<PathBuf>) -> Doxygen {
        Doxygen {
            program: program.into(),
            timeout: None,
        }
    }

    /// Bound each invocation by a wall-clock deadline.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Doxygen {
        self.timeout = timeout;
        self
    }

    /// The executable this handle invokes.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Query the tool's version string.
    pub fn version(&self) -> Result<String> {
        let output = ProcessBuilder::new(&self.program)
            .arg("--version")
            .timeout(self.timeout)
            .exec_checked()
            .context("failed to query doxygen version")?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Emit the default header/footer/stylesheet templates.
    ///
    /// Runs `doxygen -w html <header> <footer> <stylesheet> <config>`,
    /// overwriting the three target files with the tool's stock chrome.
    pub fn generate_templates(
        &self,
        header: &Path,
        footer: &Path,
        stylesheet: &Path,
        config: &Path,
    ) -> Result<()> {
        let cmd = ProcessBuilder::new(&self.program)
            .args(["-w", "html"])
            .arg(header)
            .arg(footer)
            .arg(stylesheet)
            .arg(config)
            .timeout(self.timeout);

        tracing::debug!("running `{}`", cmd.display_command());
        cmd.exec_checked()
            .context("doxygen failed to generate chrome templates")?;
        Ok(())
    }

    /// Run a full documentation build from a rendered configuration file.
    pub fn build(&self, config: &Path) -> Result<()> {
        let cmd = ProcessBuilder::new(&self.program)
            .arg(config)
            .timeout(self.timeout);

        tracing::debug!("running `{}`", cmd.display_command());
        cmd.exec_checked()
            .with_context(|| format!("doxygen build failed for {}", config.display()))?;
        Ok(())
    }
}
