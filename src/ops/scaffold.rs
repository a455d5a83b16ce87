//! Creation of new suite manifests.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::suite::MANIFEST_FILE;
use crate::util::fs;

/// Write a starter `Doxsuite.toml` into `dir`.
///
/// Refuses to overwrite an existing manifest.
pub fn init_suite(dir: &Path, name: &str) -> Result<PathBuf> {
    let manifest = dir.join(MANIFEST_FILE);
    if manifest.exists() {
        bail!("`{}` already exists", manifest.display());
    }

    let contents = format!(
        "[suite]\n\
         name = \"{name}\"\n\
         # build-dir = \"_build\"\n\
         # nav-label = \"{name} Packages:\"\n\
         \n\
         # Packages are documented in the order listed; a package may\n\
         # cross-link into any package declared before it.\n\
         [[package]]\n\
         name = \"{name}\"\n\
         # source = \"../{name}\"\n"
    );
    fs::write_string(&manifest, &contents)?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::suite::Suite;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_loadable_manifest() {
        let tmp = TempDir::new().unwrap();

        let manifest = init_suite(tmp.path(), "lemur").unwrap();

        let suite = Suite::load(&manifest).unwrap();
        assert_eq!(suite.name(), "lemur");
        assert_eq!(suite.package_names(), ["lemur"]);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let tmp = TempDir::new().unwrap();
        init_suite(tmp.path(), "lemur").unwrap();

        let err = init_suite(tmp.path(), "lemur").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
