//! Implementation of `doxsuite build`.
//!
//! Packages are processed strictly in declared order: each build consumes
//! the tag files of every package built before it, so the ordering is a
//! hard dependency, not a presentation choice. Per package the pipeline is
//! config → chrome templates → stylesheet append → header rewrite → full
//! build, with all intermediates confined to a scratch workspace that is
//! removed on every exit path.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::TempDir;

use crate::chrome;
use crate::chrome::header::rewrite_header;
use crate::core::package::{DocPackage, TagfileRef};
use crate::core::suite::Suite;
use crate::doxygen::{Doxyfile, Doxygen};
use crate::util::fs;
use crate::util::shell::{Shell, Status};

/// Placeholder marker consumed by static-site hosting.
const MARKER_FILE: &str = "contents.rst";

/// Documentation produced for one package.
#[derive(Debug, Clone)]
pub struct PackageDocs {
    pub name: String,
    pub html_dir: PathBuf,
    pub tag_file: PathBuf,
}

/// Result of a whole-suite build.
#[derive(Debug)]
pub struct BuildSummary {
    /// Per-package outputs, in build order.
    pub packages: Vec<PackageDocs>,
    /// The root redirect page.
    pub entry_page: PathBuf,
}

/// Planned configuration for one package, emitted by `build --plan`.
#[derive(Debug, Serialize)]
pub struct PackagePlan {
    pub package: String,
    pub config: Doxyfile,
    pub rendered: String,
}

/// The four intermediates living in a package's scratch workspace.
struct ScratchFiles {
    config: PathBuf,
    header: PathBuf,
    footer: PathBuf,
    stylesheet: PathBuf,
}

impl ScratchFiles {
    fn in_dir(dir: &Path) -> ScratchFiles {
        ScratchFiles {
            config: dir.join("config.txt"),
            header: dir.join("header.html"),
            footer: dir.join("footer.html"),
            stylesheet: dir.join("style.css"),
        }
    }
}

/// Build documentation for every package in the suite, then write the
/// entry redirect and hosting marker.
pub fn build_docs(suite: &Suite, doxygen: &Doxygen, shell: &Shell) -> Result<BuildSummary> {
    let html_root = suite.html_root();
    fs::ensure_dir(&html_root)?;

    let names = suite.package_names();
    let mut tagfiles: Vec<TagfileRef> = Vec::new();
    let mut packages = Vec::new();
    let mut progress = shell.progress(suite.packages().len() as u64, "documenting packages");

    for pkg in suite.packages() {
        let _span = tracing::info_span!("package", name = %pkg.name()).entered();
        shell.status(Status::Building, pkg.name());

        let docs = build_package(suite, pkg, &names, &tagfiles, doxygen)?;

        tagfiles.push(TagfileRef::for_package(&html_root, pkg.name()));
        packages.push(docs);
        progress.inc(1);
    }
    progress.finish();

    // Suite validation guarantees at least one package.
    let primary = suite.packages().last().expect("suite is non-empty");
    let entry_page = write_entry_redirect(&html_root, primary.name())?;
    fs::write_string(&suite.build_dir().join(MARKER_FILE), "")?;

    Ok(BuildSummary {
        packages,
        entry_page,
    })
}

/// Run the four pipeline stages for a single package.
fn build_package(
    suite: &Suite,
    pkg: &DocPackage,
    names: &[&str],
    prior: &[TagfileRef],
    doxygen: &Doxygen,
) -> Result<PackageDocs> {
    // Dropped on every exit path, taking the intermediates with it.
    let scratch = TempDir::new().context("failed to create scratch workspace")?;
    let files = ScratchFiles::in_dir(scratch.path());

    let config = package_doxyfile(suite, pkg, prior, &files);
    fs::write_string(&files.config, &config.render())?;

    doxygen.generate_templates(&files.header, &files.footer, &files.stylesheet, &files.config)?;
    chrome::append_nav_styles(&files.stylesheet)?;
    rewrite_header(&files.header, names, pkg.name(), suite.nav_label())?;

    doxygen.build(&files.config)?;

    Ok(PackageDocs {
        name: pkg.name().to_string(),
        html_dir: config.output_directory,
        tag_file: config.generate_tagfile,
    })
}

/// Render every package's configuration without invoking the tool.
pub fn plan_docs(suite: &Suite) -> Vec<PackagePlan> {
    let html_root = suite.html_root();
    let files = ScratchFiles::in_dir(Path::new("<scratch>"));
    let mut tagfiles: Vec<TagfileRef> = Vec::new();
    let mut plans = Vec::new();

    for pkg in suite.packages() {
        let config = package_doxyfile(suite, pkg, &tagfiles, &files);
        tagfiles.push(TagfileRef::for_package(&html_root, pkg.name()));
        plans.push(PackagePlan {
            package: pkg.name().to_string(),
            rendered: config.render(),
            config,
        });
    }
    plans
}

fn package_doxyfile(
    suite: &Suite,
    pkg: &DocPackage,
    prior: &[TagfileRef],
    files: &ScratchFiles,
) -> Doxyfile {
    let html_root = suite.html_root();
    Doxyfile {
        project_name: pkg.name().to_string(),
        input: pkg.source().to_path_buf(),
        recursive: true,
        generate_html: true,
        generate_latex: false,
        output_directory: html_root.join(pkg.name()),
        html_output: PathBuf::from("."),
        html_header: files.header.clone(),
        html_footer: files.footer.clone(),
        html_stylesheet: files.stylesheet.clone(),
        tagfiles: prior.to_vec(),
        generate_tagfile: html_root.join(format!("{}.tag", pkg.name())),
    }
}

/// Write the root page redirecting to the primary package's index.
fn write_entry_redirect(html_root: &Path, primary: &str) -> Result<PathBuf> {
    let page = html_root.join("index.html");
    let html = format!(
        "<html>\n<head>\n<meta http-equiv=\"refresh\" content=\"0; url={primary}/index.html\" />\n\
         </head>\n<body>\n</body>\n</html>\n"
    );
    fs::write_string(&page, &html)?;
    Ok(page)
}
