//! Doxsuite.toml manifest parsing and suite model.
//!
//! The manifest declares the documentation suite: its name, build root, and
//! the ordered package list. Order matters twice over — it is both the build
//! order and the cross-reference order, since a package may only link into
//! tag files of packages that were built before it.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::package::DocPackage;
use crate::util::fs;

/// Canonical manifest file name.
pub const MANIFEST_FILE: &str = "Doxsuite.toml";

/// Raw manifest schema as written on disk.
#[derive(Debug, Deserialize)]
struct RawManifest {
    suite: RawSuite,
    #[serde(default, rename = "package")]
    packages: Vec<RawPackage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawSuite {
    name: String,
    #[serde(default)]
    build_dir: Option<PathBuf>,
    #[serde(default)]
    nav_label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: String,
    #[serde(default)]
    source: Option<PathBuf>,
}

/// A validated documentation suite.
#[derive(Debug, Clone)]
pub struct Suite {
    name: String,
    build_dir: PathBuf,
    nav_label: String,
    packages: Vec<DocPackage>,
}

impl Suite {
    /// Load and validate a suite from a manifest file.
    ///
    /// Relative build and source paths are resolved against the manifest's
    /// directory, so the suite builds the same tree no matter where the
    /// command was invoked from.
    pub fn load(manifest_path: &Path) -> Result<Suite> {
        let text = fs::read_to_string(manifest_path)?;
        let raw: RawManifest = toml::from_str(&text)
            .with_context(|| format!("failed to parse {}", manifest_path.display()))?;

        let root = manifest_path.parent().unwrap_or_else(|| Path::new("."));

        let packages = raw
            .packages
            .into_iter()
            .map(|p| match p.source {
                Some(source) => DocPackage::with_source(p.name, root.join(source)),
                None => {
                    let name = p.name;
                    let source = root.join("..").join(&name);
                    DocPackage::with_source(name, source)
                }
            })
            .collect();

        let build_dir = root.join(raw.suite.build_dir.unwrap_or_else(|| PathBuf::from("_build")));

        Suite::new(raw.suite.name, build_dir, raw.suite.nav_label, packages)
    }

    /// Construct a suite directly; used by `load` and by tests.
    pub fn new(
        name: impl Into<String>,
        build_dir: impl Into<PathBuf>,
        nav_label: Option<String>,
        packages: Vec<DocPackage>,
    ) -> Result<Suite> {
        let name = name.into();
        if name.is_empty() {
            bail!("suite name must not be empty");
        }
        if packages.is_empty() {
            bail!("suite `{}` declares no packages", name);
        }
        for (i, pkg) in packages.iter().enumerate() {
            if pkg.name().is_empty() {
                bail!("package {} has an empty name", i + 1);
            }
            if packages[..i].iter().any(|p| p.name() == pkg.name()) {
                bail!("duplicate package `{}` in suite", pkg.name());
            }
        }

        let nav_label = nav_label.unwrap_or_else(|| format!("{name} Packages:"));

        Ok(Suite {
            name,
            build_dir: build_dir.into(),
            nav_label,
            packages,
        })
    }

    /// The suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The build root; everything the suite produces lives under here.
    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    /// The heading shown in the injected navigation bar.
    pub fn nav_label(&self) -> &str {
        &self.nav_label
    }

    /// Packages in build (and cross-reference) order.
    pub fn packages(&self) -> &[DocPackage] {
        &self.packages
    }

    /// Package identifiers in build order.
    pub fn package_names(&self) -> Vec<&str> {
        self.packages.iter().map(|p| p.name()).collect()
    }

    /// The shared root all per-package HTML trees live under.
    pub fn html_root(&self) -> PathBuf {
        self.build_dir.join("html")
    }
}

/// Find the suite manifest, walking up from `start`.
pub fn find_manifest(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            bail!(
                "could not find `{}` in `{}` or any parent directory\n\
                 hint: run `doxsuite init` to create one",
                MANIFEST_FILE,
                start.display()
            );
        }
    }
}
