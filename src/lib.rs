//! Doxsuite - cross-referenced multi-package doxygen builds
//!
//! This crate drives the external doxygen generator over an ordered suite
//! of packages, wiring the generated trees together with cross-reference
//! tag files and a shared navigation header, and producing a root
//! redirect page for hosting.

pub mod chrome;
pub mod core;
pub mod doxygen;
pub mod ops;
pub mod util;

pub use crate::core::{find_manifest, DocPackage, Suite, TagfileRef};
pub use crate::doxygen::{Doxyfile, Doxygen};
pub use crate::util::shell::Shell;
