//! Core suite model: packages, manifests, cross-reference tag files.

pub mod package;
pub mod suite;

pub use package::{DocPackage, TagfileRef};
pub use suite::{find_manifest, Suite, MANIFEST_FILE};
