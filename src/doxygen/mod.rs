//! The external documentation generator: configuration and invocation.

pub mod doxyfile;
pub mod tool;

pub use doxyfile::Doxyfile;
pub use tool::{Doxygen, DoxygenNotFound};
