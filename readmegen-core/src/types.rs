//! Domain types for a README project description.
//!
//! Field names serialize in camelCase so project files use the same keys as
//! the form that produced them (`githubUrl`, `socialLinks`, `tableOfContents`).
//! Every struct is `#[serde(default)]`: a partial project file is valid and
//! missing fields take the values of [`Default`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// License applied when a project does not name one.
pub const DEFAULT_LICENSE: &str = "MIT";

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

/// A single badge: a human-readable label plus a hex or named palette color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub text: String,
    pub color: String,
}

impl Badge {
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

/// Badge selections shown at the top of the README.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Badges {
    /// Technology badges; `text` is expected to match a catalog entry.
    pub tech: Vec<Badge>,
    /// Quick-pick status badges.
    pub status: Vec<Badge>,
    /// Version label; empty renders as `1.0.0`.
    pub version: String,
    /// License label for the badge only (independent of [`ProjectInfo::license`]).
    pub license: String,
}

impl Default for Badges {
    fn default() -> Self {
        Self {
            tech: Vec::new(),
            status: Vec::new(),
            version: String::new(),
            license: DEFAULT_LICENSE.to_string(),
        }
    }
}

impl Badges {
    /// Append a technology badge unless one with the same text is present.
    pub fn add_tech(&mut self, badge: Badge) -> bool {
        push_unique(&mut self.tech, badge)
    }

    pub fn remove_tech(&mut self, index: usize) -> Option<Badge> {
        remove_at(&mut self.tech, index)
    }

    pub fn update_tech(&mut self, index: usize, badge: Badge) -> bool {
        replace_at(&mut self.tech, index, badge)
    }

    /// Append a status badge unless one with the same text is present.
    pub fn add_status(&mut self, badge: Badge) -> bool {
        push_unique(&mut self.status, badge)
    }

    pub fn remove_status(&mut self, index: usize) -> Option<Badge> {
        remove_at(&mut self.status, index)
    }

    pub fn update_status(&mut self, index: usize, badge: Badge) -> bool {
        replace_at(&mut self.status, index, badge)
    }
}

fn push_unique(list: &mut Vec<Badge>, badge: Badge) -> bool {
    if list.iter().any(|b| b.text == badge.text) {
        return false;
    }
    list.push(badge);
    true
}

fn remove_at<T>(list: &mut Vec<T>, index: usize) -> Option<T> {
    (index < list.len()).then(|| list.remove(index))
}

fn replace_at<T>(list: &mut [T], index: usize, value: T) -> bool {
    match list.get_mut(index) {
        Some(slot) => {
            *slot = value;
            true
        }
        None => false,
    }
}

// ---------------------------------------------------------------------------
// Social links
// ---------------------------------------------------------------------------

/// Supported social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Youtube,
    Website,
    Email,
}

impl SocialPlatform {
    /// Display label used in rendered links.
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Github => "GitHub",
            SocialPlatform::Linkedin => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Youtube => "YouTube",
            SocialPlatform::Website => "Website",
            SocialPlatform::Email => "Email",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub url: String,
}

// ---------------------------------------------------------------------------
// Stats, section flags, custom sections
// ---------------------------------------------------------------------------

/// Repository counters. Carried in project files; not rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub stars: u64,
    pub forks: u64,
    pub issues: u64,
    pub downloads: u64,
}

/// Toggles for the optional document sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionFlags {
    pub table_of_contents: bool,
    pub installation: bool,
    pub usage: bool,
    pub api: bool,
    pub contributing: bool,
    pub license: bool,
    pub changelog: bool,
    pub roadmap: bool,
    pub screenshots: bool,
    pub faq: bool,
}

impl Default for SectionFlags {
    fn default() -> Self {
        Self {
            table_of_contents: true,
            installation: true,
            usage: true,
            api: false,
            contributing: true,
            license: true,
            changelog: false,
            roadmap: false,
            screenshots: false,
            faq: false,
        }
    }
}

/// A user-defined section appended to the document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSection {
    pub title: String,
    pub content: String,
}

// ---------------------------------------------------------------------------
// ProjectInfo
// ---------------------------------------------------------------------------

/// Everything the generator needs to produce a README.
///
/// Empty strings are valid everywhere and select the generator's placeholder
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectInfo {
    pub title: String,
    pub description: String,
    pub author: String,
    pub github_url: String,
    pub demo: String,
    /// Free-text technology names. Kept for file compatibility; badges come
    /// from [`Badges::tech`].
    pub technologies: Vec<String>,
    pub features: Vec<String>,
    pub installation: String,
    pub usage: String,
    pub contributing: String,
    pub license: String,
    pub badges: Badges,
    pub social_links: Vec<SocialLink>,
    pub stats: Stats,
    pub sections: SectionFlags,
    pub custom_sections: Vec<CustomSection>,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            github_url: String::new(),
            demo: String::new(),
            technologies: Vec::new(),
            features: Vec::new(),
            installation: String::new(),
            usage: String::new(),
            contributing: String::new(),
            license: DEFAULT_LICENSE.to_string(),
            badges: Badges::default(),
            social_links: Vec::new(),
            stats: Stats::default(),
            sections: SectionFlags::default(),
            custom_sections: Vec::new(),
        }
    }
}

impl ProjectInfo {
    /// Append a feature. Input is trimmed; blank input is ignored.
    pub fn add_feature(&mut self, feature: &str) -> bool {
        let feature = feature.trim();
        if feature.is_empty() {
            return false;
        }
        self.features.push(feature.to_string());
        true
    }

    pub fn remove_feature(&mut self, index: usize) -> Option<String> {
        remove_at(&mut self.features, index)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
