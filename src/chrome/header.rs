//! Title-area replacement in the generated header template.
//!
//! Doxygen's stock header delimits its title area with a pair of comment
//! markers. The region between them is discarded and replaced with the
//! suite navigation bar. The template format is assumed stable: a marker
//! that is absent or appears more than once means the template is not
//! what this code was written against, and that is a hard error rather
//! than a silent no-op.

use anyhow::{Context, Result};
use miette::Diagnostic;
use thiserror::Error;

use crate::chrome::render_nav;
use crate::util::fs;
use std::path::Path;

/// Marker opening the title area in the generated header.
pub const BEGIN_TITLEAREA: &str = "<!--BEGIN TITLEAREA-->";

/// Marker closing the title area in the generated header.
pub const END_TITLEAREA: &str = "<!--END TITLEAREA-->";

/// The header template did not have the expected title-area markers.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum HeaderFormatError {
    #[error("header template is missing the `{0}` marker")]
    #[diagnostic(
        code(doxsuite::chrome::missing_marker),
        help("The installed doxygen emits an unexpected header template; check its version with `doxsuite doctor`")
    )]
    MissingMarker(&'static str),

    #[error("header template contains more than one `{0}` marker")]
    #[diagnostic(code(doxsuite::chrome::duplicate_marker))]
    DuplicateMarker(&'static str),
}

/// Split a header template around its title area.
///
/// Returns the text before the opening marker and the text after the
/// closing marker; both markers and everything between them are dropped.
pub fn split_title_area(html: &str) -> Result<(&str, &str), HeaderFormatError> {
    let begin = find_single(html, BEGIN_TITLEAREA)?;
    let end = find_single(html, END_TITLEAREA)?;

    Ok((&html[..begin], &html[end + END_TITLEAREA.len()..]))
}

/// Find the byte offset of exactly one occurrence of `marker`.
fn find_single(html: &str, marker: &'static str) -> Result<usize, HeaderFormatError> {
    let mut occurrences = html.match_indices(marker);
    let first = occurrences
        .next()
        .ok_or(HeaderFormatError::MissingMarker(marker))?;
    if occurrences.next().is_some() {
        return Err(HeaderFormatError::DuplicateMarker(marker));
    }
    Ok(first.0)
}

/// Replace the header file's title area with the suite navigation bar.
///
/// The file is only rewritten once the template has been validated and the
/// whole replacement assembled, so a malformed template leaves the file
/// untouched.
pub fn rewrite_header(
    path: &Path,
    packages: &[&str],
    current: &str,
    label: &str,
) -> Result<()> {
    let template = fs::read_to_string(path)?;
    let (prefix, suffix) = split_title_area(&template)
        .with_context(|| format!("unusable header template at {}", path.display()))?;

    let mut out = String::with_capacity(template.len());
    out.push_str(prefix);
    out.push_str(&render_nav(packages, current, label));
    out.push_str(suffix);

    fs::write_string(path, &out)
}
