//! Template context — serializable rendering payload built from [`ProjectInfo`].
//!
//! All defaulting happens here, so templates only ever see resolved values:
//! an empty field has already been replaced by its placeholder. Strings whose
//! exact bytes matter (badge rows, the tech stack block) are assembled in Rust
//! rather than in Tera.

use serde::{Deserialize, Serialize};

use readmegen_core::types::DEFAULT_LICENSE;
use readmegen_core::{ProjectInfo, SectionFlags, StackGroups, TechCatalog};

use crate::badge::{self, RepoStat, PLACEHOLDER_TECH_BADGE};
use crate::error::RenderError;
use crate::section::{heading_anchor, plain_title, SectionKind};

// ---------------------------------------------------------------------------
// Placeholders
// ---------------------------------------------------------------------------

pub const PLACEHOLDER_TITLE: &str = "Your Project Name";
pub const PLACEHOLDER_DESCRIPTION: &str =
    "A brief description of what your project does and who it's for.";
pub const PLACEHOLDER_AUTHOR: &str = "YourUsername";
pub const PLACEHOLDER_GITHUB_URL: &str = "https://github.com/yourusername/your-repo";
pub const PLACEHOLDER_DEMO_URL: &str = "https://your-project-demo.vercel.app";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_INSTALL_COMMAND: &str = "npm install";
pub const DEFAULT_USAGE_COMMAND: &str = "npm start";
pub const DEFAULT_CONTRIBUTING: &str =
    "Contributions are welcome! Please feel free to submit a Pull Request.";

pub const DEFAULT_FEATURES: &[&str] = &[
    "🚀 Fast and efficient performance",
    "📱 Mobile-responsive design",
    "🔒 Secure and reliable",
    "🎨 Clean and modern UI",
    "⚡ Easy to use and customize",
];

/// Emitted under "Tech Stack" when no technology badges are selected.
const GENERIC_STACK: &str = "**Frontend**: Modern JavaScript frameworks and libraries\n\
**Backend**: Scalable server technologies\n\
**Database**: Reliable data storage solutions  \n\
**DevOps**: Cloud deployment and containerization";

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

// ---------------------------------------------------------------------------
// ReadmeContext
// ---------------------------------------------------------------------------

/// Everything a section template can reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadmeContext {
    pub identity: IdentityCtx,
    pub badges: BadgesCtx,
    pub repo_stats: RepoStatsCtx,
    pub features: Vec<String>,
    pub stack: StackCtx,
    pub commands: CommandsCtx,
    pub contributing: ContributingCtx,
    pub license: LicenseCtx,
    pub social_links: Vec<SocialLinkCtx>,
    pub custom_sections: Vec<CustomSectionCtx>,
    pub toc: Vec<TocEntryCtx>,
    pub sections: SectionFlags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityCtx {
    pub title: String,
    pub description: String,
    pub author: String,
    pub github_url: String,
    pub demo_url: String,
    pub slug: String,
    pub version: String,
    /// Link target of the "Documentation" entry in the header.
    pub docs_anchor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgesCtx {
    pub version: String,
    pub license: String,
    pub status: Vec<String>,
    pub tech: Vec<String>,
    /// Version, license, then status badges, space-separated.
    pub row: String,
    /// Technology badges, or the placeholder badge when none are selected.
    pub tech_row: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStatsCtx {
    pub stars: String,
    pub forks: String,
    pub issues: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackCtx {
    /// False when no technology badges are selected.
    pub selected: bool,
    pub lines: Vec<StackLineCtx>,
    pub block: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackLineCtx {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsCtx {
    pub clone_url: String,
    pub install: String,
    pub usage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributingCtx {
    pub intro: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseCtx {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinkCtx {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSectionCtx {
    pub title: String,
    pub content: String,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntryCtx {
    pub title: String,
    pub anchor: String,
}

impl ReadmeContext {
    /// Resolve every placeholder and precompute badge rows for `info`.
    pub fn from_project(info: &ProjectInfo, catalog: &TechCatalog, groups: &StackGroups) -> Self {
        let title = or_default(&info.title, PLACEHOLDER_TITLE);
        let author = or_default(&info.author, PLACEHOLDER_AUTHOR);
        let github_url = or_default(&info.github_url, PLACEHOLDER_GITHUB_URL);
        let slug = badge::slugify(&title);
        let version = or_default(&info.badges.version, DEFAULT_VERSION);

        let badges = build_badges(info, catalog, &version);
        let repo_stats = RepoStatsCtx {
            stars: badge::repo_stat_url(RepoStat::Stars, &author, &slug),
            forks: badge::repo_stat_url(RepoStat::Forks, &author, &slug),
            issues: badge::repo_stat_url(RepoStat::Issues, &author, &slug),
        };

        let features = if info.features.is_empty() {
            DEFAULT_FEATURES.iter().map(|f| (*f).to_string()).collect()
        } else {
            info.features.clone()
        };

        let custom_sections: Vec<CustomSectionCtx> = info
            .custom_sections
            .iter()
            .filter(|s| {
                let keep = !s.title.trim().is_empty();
                if !keep {
                    tracing::debug!("skipping custom section without a title");
                }
                keep
            })
            .map(|s| CustomSectionCtx {
                title: s.title.trim().to_string(),
                content: s.content.trim_end().to_string(),
                anchor: heading_anchor(s.title.trim()),
            })
            .collect();

        let toc = build_toc(&info.sections, &custom_sections);
        let docs_anchor = docs_link(&info.sections, &github_url);

        ReadmeContext {
            identity: IdentityCtx {
                title,
                description: or_default(&info.description, PLACEHOLDER_DESCRIPTION),
                author,
                github_url: github_url.clone(),
                demo_url: or_default(&info.demo, PLACEHOLDER_DEMO_URL),
                slug,
                version,
                docs_anchor,
            },
            badges,
            repo_stats,
            features,
            stack: build_stack(info, groups),
            commands: CommandsCtx {
                clone_url: github_url,
                install: or_default(&info.installation, DEFAULT_INSTALL_COMMAND),
                usage: or_default(&info.usage, DEFAULT_USAGE_COMMAND),
            },
            contributing: ContributingCtx {
                intro: or_default(info.contributing.trim(), DEFAULT_CONTRIBUTING),
            },
            license: LicenseCtx {
                name: resolve_license(&info.license, &info.badges.license),
            },
            social_links: info
                .social_links
                .iter()
                .filter(|l| !l.url.is_empty())
                .map(|l| SocialLinkCtx {
                    label: if l.username.is_empty() {
                        l.platform.label().to_string()
                    } else {
                        format!("{} ({})", l.platform.label(), l.username)
                    },
                    url: l.url.clone(),
                })
                .collect(),
            custom_sections,
            toc,
            sections: info.sections,
        }
    }

    /// Serialize into a [`tera::Context`].
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        Ok(tera::Context::from_serialize(self)?)
    }
}

/// `primary`, else `secondary`, else MIT.
fn resolve_license(primary: &str, secondary: &str) -> String {
    [primary, secondary]
        .into_iter()
        .find(|l| !l.is_empty())
        .unwrap_or(DEFAULT_LICENSE)
        .to_string()
}

fn build_badges(info: &ProjectInfo, catalog: &TechCatalog, version: &str) -> BadgesCtx {
    let version_badge = badge::version_badge(version);
    let license_badge =
        badge::license_badge(&resolve_license(&info.badges.license, &info.license));
    let status: Vec<String> = info.badges.status.iter().map(badge::status_badge).collect();
    let tech: Vec<String> = info
        .badges
        .tech
        .iter()
        .map(|b| badge::tech_badge(b, catalog))
        .collect();

    let row = [version_badge.clone(), license_badge.clone()]
        .into_iter()
        .chain(status.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ");
    let tech_row = if tech.is_empty() {
        PLACEHOLDER_TECH_BADGE.to_string()
    } else {
        tech.join(" ")
    };

    BadgesCtx {
        version: version_badge,
        license: license_badge,
        status,
        tech,
        row,
        tech_row,
    }
}

fn build_stack(info: &ProjectInfo, groups: &StackGroups) -> StackCtx {
    if info.badges.tech.is_empty() {
        return StackCtx {
            selected: false,
            lines: Vec::new(),
            block: GENERIC_STACK.to_string(),
        };
    }

    let lines: Vec<StackLineCtx> = groups
        .groups()
        .iter()
        .map(|group| {
            let members: Vec<&str> = info
                .badges
                .tech
                .iter()
                .filter(|b| group.contains(&b.text))
                .map(|b| b.text.as_str())
                .collect();
            StackLineCtx {
                label: group.label.clone(),
                value: if members.is_empty() {
                    group.fallback.clone()
                } else {
                    members.join(", ")
                },
            }
        })
        .collect();
    let block = lines
        .iter()
        .map(|l| format!("**{}**: {}", l.label, l.value))
        .collect::<Vec<_>>()
        .join("\n\n");

    StackCtx {
        selected: true,
        lines,
        block,
    }
}

fn build_toc(flags: &SectionFlags, custom: &[CustomSectionCtx]) -> Vec<TocEntryCtx> {
    let mut entries = Vec::new();
    for kind in SectionKind::all() {
        if !kind.in_table_of_contents() || !kind.is_enabled(flags) {
            continue;
        }
        if *kind == SectionKind::Custom {
            entries.extend(custom.iter().map(|s| TocEntryCtx {
                title: s.title.clone(),
                anchor: s.anchor.clone(),
            }));
        } else if let Some(heading) = kind.heading() {
            entries.push(TocEntryCtx {
                title: plain_title(heading).to_string(),
                anchor: heading_anchor(heading),
            });
        }
    }
    entries
}

/// The installation heading when it is rendered, else the repository README.
fn docs_link(flags: &SectionFlags, github_url: &str) -> String {
    match SectionKind::Installation.heading() {
        Some(heading) if SectionKind::Installation.is_enabled(flags) => {
            format!("#{}", heading_anchor(heading))
        }
        _ => format!("{github_url}#readme"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
