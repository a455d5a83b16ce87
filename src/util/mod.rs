//! Shared utilities

pub mod fs;
pub mod process;
pub mod shell;

pub use process::{ExecError, ProcessBuilder};
pub use shell::{Shell, Status, Verbosity};
