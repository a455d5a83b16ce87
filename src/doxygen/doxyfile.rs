//! Structured doxygen configuration and its textual rendering.
//!
//! The configuration is held as a record and rendered by a single
//! serializer, so the pipeline (and its tests) work against typed fields
//! rather than an ad-hoc format string.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use crate::core::package::TagfileRef;

/// One package's doxygen configuration.
///
/// Rendered to the line-oriented `KEY = VALUE` syntax doxygen consumes.
/// Immutable once rendered; each instance is written to scratch and read
/// exactly once by the build invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Doxyfile {
    /// Project name, quoted in the rendered output.
    pub project_name: String,
    /// Root directory doxygen scans for sources.
    pub input: PathBuf,
    /// Recurse into subdirectories of `input`.
    pub recursive: bool,
    pub generate_html: bool,
    pub generate_latex: bool,
    /// Per-package output directory under the shared build root.
    pub output_directory: PathBuf,
    /// HTML subpath inside `output_directory`; `.` keeps the tree flat.
    pub html_output: PathBuf,
    pub html_header: PathBuf,
    pub html_footer: PathBuf,
    pub html_stylesheet: PathBuf,
    /// Tag files of every previously built package, in build order.
    pub tagfiles: Vec<TagfileRef>,
    /// Where this package's own tag file is written.
    pub generate_tagfile: PathBuf,
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "YES"
    } else {
        "NO"
    }
}

impl Doxyfile {
    /// Render to doxygen's `KEY = VALUE` configuration text.
    pub fn render(&self) -> String {
        let tagfiles = self
            .tagfiles
            .iter()
            .map(TagfileRef::render)
            .collect::<Vec<_>>()
            .join(" ");

        let mut out = String::new();
        // Infallible: writing to a String cannot fail.
        let _ = writeln!(out, "PROJECT_NAME = \"{}\"", self.project_name);
        let _ = writeln!(out, "INPUT = {}", self.input.display());
        let _ = writeln!(out, "RECURSIVE = {}", yes_no(self.recursive));
        let _ = writeln!(out, "GENERATE_LATEX = {}", yes_no(self.generate_latex));
        let _ = writeln!(out, "GENERATE_HTML = {}", yes_no(self.generate_html));
        let _ = writeln!(out, "OUTPUT_DIRECTORY = {}", self.output_directory.display());
        let _ = writeln!(out, "HTML_OUTPUT = {}", self.html_output.display());
        let _ = writeln!(out, "HTML_HEADER = {}", self.html_header.display());
        let _ = writeln!(out, "HTML_FOOTER = {}", self.html_footer.display());
        let _ = writeln!(out, "HTML_STYLESHEET = {}", self.html_stylesheet.display());
        let _ = writeln!(out, "TAGFILES = {tagfiles}");
        let _ = writeln!(out, "GENERATE_TAGFILE = {}", self.generate_tagfile.display());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn sample(tagfiles: Vec<TagfileRef>) -> Doxyfile {
        Doxyfile {
            project_name: "ompl_lemur".to_string(),
            input: PathBuf::from("../ompl_lemur"),
            recursive: true,
            generate_html: true,
            generate_latex: false,
            output_directory: PathBuf::from("_build/html/ompl_lemur"),
            html_output: PathBuf::from("."),
            html_header: PathBuf::from("/scratch/header.html"),
            html_footer: PathBuf::from("/scratch/footer.html"),
            html_stylesheet: PathBuf::from("/scratch/style.css"),
            tagfiles,
            generate_tagfile: PathBuf::from("_build/html/ompl_lemur.tag"),
        }
    }

    #[test]
    fn test_render_key_values() {
        let rendered = sample(vec![]).render();

        assert!(rendered.contains("PROJECT_NAME = \"ompl_lemur\""));
        assert!(rendered.contains("INPUT = ../ompl_lemur"));
        assert!(rendered.contains("RECURSIVE = YES"));
        assert!(rendered.contains("GENERATE_LATEX = NO"));
        assert!(rendered.contains("GENERATE_HTML = YES"));
        assert!(rendered.contains("OUTPUT_DIRECTORY = _build/html/ompl_lemur"));
        assert!(rendered.contains("HTML_OUTPUT = .\n"));
        assert!(rendered.contains("HTML_HEADER = /scratch/header.html"));
        assert!(rendered.contains("GENERATE_TAGFILE = _build/html/ompl_lemur.tag"));
    }

    #[test]
    fn test_render_empty_tagfiles_line() {
        let rendered = sample(vec![]).render();
        assert!(rendered.contains("TAGFILES = \n"));
    }

    #[test]
    fn test_render_joins_tagfiles_in_order() {
        let html_root = Path::new("_build/html");
        let rendered = sample(vec![
            TagfileRef::for_package(html_root, "pr_bgl"),
            TagfileRef::for_package(html_root, "pr_util"),
        ])
        .render();

        assert!(rendered.contains(
            "TAGFILES = _build/html/pr_bgl.tag=../pr_bgl _build/html/pr_util.tag=../pr_util\n"
        ));
    }
}
