//! Badge markdown, shields.io URLs, and the title slug.
//!
//! Only human-readable label segments are percent-encoded. Colors and logo
//! identifiers come from catalogs (or the user's own color field) and are
//! inserted as-is.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use readmegen_core::{catalog::is_label_whitespace, types::Badge, TechCatalog};

const SHIELDS: &str = "https://img.shields.io";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Shown in place of the technology row when no technologies are selected.
pub const PLACEHOLDER_TECH_BADGE: &str =
    "![Tech Stack](https://img.shields.io/badge/Add-Technologies-blue?style=for-the-badge)";

/// Percent-encode a badge label the way `encodeURIComponent` does.
pub fn encode_label(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// Lowercase, collapse whitespace runs to `-`, drop everything outside `[a-z0-9-]`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.to_lowercase().chars() {
        if is_label_whitespace(c) {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            slug.push(c);
        }
    }
    slug
}

pub fn tech_badge(badge: &Badge, catalog: &TechCatalog) -> String {
    format!(
        "![{text}]({SHIELDS}/badge/{label}-{color}?style=for-the-badge&logo={logo}&logoColor=white)",
        text = badge.text,
        label = encode_label(&badge.text),
        color = badge.color,
        logo = catalog.logo_for(&badge.text),
    )
}

pub fn status_badge(badge: &Badge) -> String {
    format!(
        "![{text}]({SHIELDS}/badge/Status-{label}-{color}?style=for-the-badge)",
        text = badge.text,
        label = encode_label(&badge.text),
        color = badge.color,
    )
}

pub fn version_badge(version: &str) -> String {
    format!("![Version]({SHIELDS}/badge/Version-{version}-blue?style=for-the-badge)")
}

pub fn license_badge(license: &str) -> String {
    format!("![License]({SHIELDS}/badge/License-{license}-green?style=for-the-badge)")
}

/// Repository counters rendered by shields.io from GitHub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoStat {
    Stars,
    Forks,
    Issues,
}

impl RepoStat {
    fn path(&self) -> &'static str {
        match self {
            RepoStat::Stars => "stars",
            RepoStat::Forks => "forks",
            RepoStat::Issues => "issues",
        }
    }
}

pub fn repo_stat_url(stat: RepoStat, owner: &str, slug: &str) -> String {
    format!(
        "{SHIELDS}/github/{}/{owner}/{slug}?style=for-the-badge&logo=github",
        stat.path()
    )
}
