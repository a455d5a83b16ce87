//! Environment health checks.
//!
//! The `doctor` command performs fast checks to verify that a suite build
//! can actually run: the external generator must be present, and a usable
//! manifest should be in reach.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::core::suite::{find_manifest, Suite};
use crate::doxygen::Doxygen;

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,

    /// Whether the check passed.
    pub passed: bool,

    /// Human-readable status message.
    pub message: String,

    /// Path to the tool or file (if applicable).
    pub path: Option<PathBuf>,

    /// Whether a failure here blocks builds outright.
    pub required: bool,
}

impl CheckResult {
    fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            required: true,
        }
    }

    fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: false,
            message: message.into(),
            path: None,
            required: true,
        }
    }

    fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Aggregated doctor report.
#[derive(Debug)]
pub struct DoctorReport {
    pub checks: Vec<CheckResult>,
}

impl DoctorReport {
    /// Whether every required check passed.
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed || !c.required)
    }
}

/// Run all health checks from the given working directory.
pub fn doctor(cwd: &Path) -> DoctorReport {
    DoctorReport {
        checks: vec![check_doxygen(), check_manifest(cwd)],
    }
}

fn check_doxygen() -> CheckResult {
    match Doxygen::locate() {
        Ok(tool) => match tool.version() {
            Ok(version) => CheckResult::pass("doxygen", format!("found doxygen {version}"))
                .with_path(tool.program()),
            Err(err) => CheckResult::fail(
                "doxygen",
                format!(
                    "found {} but `--version` failed: {err:#}",
                    tool.program().display()
                ),
            ),
        },
        Err(err) => CheckResult::fail("doxygen", err.to_string()),
    }
}

fn check_manifest(cwd: &Path) -> CheckResult {
    match find_manifest(cwd) {
        Ok(path) => match Suite::load(&path) {
            Ok(suite) => CheckResult::pass(
                "manifest",
                format!(
                    "suite `{}` with {} package(s)",
                    suite.name(),
                    suite.packages().len()
                ),
            )
            .with_path(path)
            .optional(),
            Err(err) => CheckResult::fail("manifest", format!("{err:#}"))
                .with_path(path)
                .optional(),
        },
        Err(_) => {
            CheckResult::fail("manifest", "no Doxsuite.toml found (run `doxsuite init`)").optional()
        }
    }
}

/// Format the report for terminal output.
pub fn format_report(report: &DoctorReport, verbose: bool) -> String {
    let mut out = String::new();

    for check in &report.checks {
        let mark = if check.passed { "ok" } else { "FAIL" };
        let _ = writeln!(out, "{mark:>4}  {}: {}", check.name, check.message);
        if verbose {
            if let Some(ref path) = check.path {
                let _ = writeln!(out, "      --> {}", path.display());
            }
        }
    }

    if report.all_required_passed() {
        out.push_str("\nall required checks passed\n");
    } else {
        out.push_str("\nsome required checks failed\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_passes_when_optional_check_fails() {
        let report = DoctorReport {
            checks: vec![
                CheckResult::pass("doxygen", "found doxygen 1.9.8"),
                CheckResult::fail("manifest", "no Doxsuite.toml found").optional(),
            ],
        };
        assert!(report.all_required_passed());
    }

    #[test]
    fn test_report_fails_on_required_failure() {
        let report = DoctorReport {
            checks: vec![CheckResult::fail("doxygen", "doxygen executable not found")],
        };
        assert!(!report.all_required_passed());
    }

    #[test]
    fn test_format_report_lists_checks() {
        let report = DoctorReport {
            checks: vec![
                CheckResult::pass("doxygen", "found doxygen 1.9.8").with_path("/usr/bin/doxygen"),
                CheckResult::fail("manifest", "no Doxsuite.toml found").optional(),
            ],
        };

        let text = format_report(&report, true);
        assert!(text.contains("ok  doxygen: found doxygen 1.9.8"));
        assert!(text.contains("FAIL  manifest:"));
        assert!(text.contains("--> /usr/bin/doxygen"));
        assert!(text.contains("all required checks passed"));
    }
}
