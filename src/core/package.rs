//! Package identity and cross-reference tag files.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A documented package within a suite.
///
/// The name doubles as the output subdirectory and tag-file stem, so it is
/// expected to be a plain path component. The source directory defaults to
/// the package's checkout next to the suite manifest's parent (`../<name>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPackage {
    name: String,
    source: PathBuf,
}

impl DocPackage {
    /// Create a package whose sources live at the default `../<name>`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let source = Path::new("..").join(&name);
        DocPackage { name, source }
    }

    /// Create a package with an explicit source directory.
    pub fn with_source(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        DocPackage {
            name: name.into(),
            source: source.into(),
        }
    }

    /// The package identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The directory doxygen scans for this package.
    pub fn source(&self) -> &Path {
        &self.source
    }
}

/// A pointer into an already-built package's tag file.
///
/// Rendered as `<tag-file>=<link-prefix>` in the TAGFILES configuration
/// value. The prefix is the relative hop from one package's HTML tree to a
/// sibling's (`../<name>`), which holds for every pair of packages because
/// all trees live directly under the shared `html/` root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagfileRef {
    tag_file: PathBuf,
    link_prefix: String,
}

impl TagfileRef {
    /// Reference the tag file that building `name` under `html_root` produces.
    pub fn for_package(html_root: &Path, name: &str) -> Self {
        TagfileRef {
            tag_file: html_root.join(format!("{name}.tag")),
            link_prefix: format!("../{name}"),
        }
    }

    /// The tag file's location on disk.
    pub fn tag_file(&self) -> &Path {
        &self.tag_file
    }

    /// Render to the `path=prefix` form TAGFILES expects.
    pub fn render(&self) -> String {
        format!("{}={}", self.tag_file.display(), self.link_prefix)
    }
}
