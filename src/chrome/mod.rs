//! Shared HTML chrome: navigation styles and the navigation bar.
//!
//! Every generated page carries the same header and stylesheet. The
//! stylesheet gains the navigation button rules below; the header's title
//! area is replaced with a bar linking every package in the suite (see
//! [`header`]).

pub mod header;

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use crate::util::fs;

/// CSS appended to the generated stylesheet: the default navigation
/// button, the current-page variant, and the hover rule.
///
/// Leads with a newline so the block never glues onto the stylesheet's
/// last line.
pub const NAV_STYLE_BLOCK: &str = "
.mybtn {
display:inline-block;
background-color:#333333;
color: #FFFFFF;
padding: 3px 15px;
text-align: center;
text-decoration: none;
margin-left:5px;
}
.mybtn-current {
display:inline-block;
background-color:#333388;
color: #FFFFFF;
padding: 3px 15px;
text-align: center;
text-decoration: none;
margin-left:5px;
}
.mybtn:hover {
color:white;
background-color:#5555CC;
opacity:1;
}";

/// CSS class for a navigation link to another package.
pub const NAV_CLASS: &str = "mybtn";

/// CSS class for the navigation link to the page's own package.
pub const NAV_CLASS_CURRENT: &str = "mybtn-current";

/// Append the navigation button styles to a generated stylesheet.
///
/// Append-only: prior content is neither truncated nor reordered.
pub fn append_nav_styles(stylesheet: &Path) -> Result<()> {
    fs::append_string(stylesheet, NAV_STYLE_BLOCK)
}

/// Render the navigation bar for one package's pages.
///
/// Links every package in the suite, sorted lexicographically by
/// identifier regardless of build order, each pointing one directory level
/// up at the sibling package's index page. The entry matching `current`
/// gets the highlighted class.
pub fn render_nav(packages: &[&str], current: &str, label: &str) -> String {
    let mut names = packages.to_vec();
    names.sort_unstable();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "<div id=\"titlearea\" style=\"background-color:#000000;padding-left:5px;\
         color:white;font-size:14px;\">{label}"
    );
    for name in names {
        let class = if name == current {
            NAV_CLASS_CURRENT
        } else {
            NAV_CLASS
        };
        let _ = writeln!(
            out,
            "<a href=\"../{name}/index.html\" class=\"{class}\">{name}</a>"
        );
    }
    out.push_str("<br style=\"clear:left;\" /></div>\n");
    out
}
