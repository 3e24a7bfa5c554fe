//! Document sections: fixed order, flag gating, template names, anchors.

use readmegen_core::SectionFlags;

/// Every section of a generated README, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Overview,
    TableOfContents,
    Features,
    Technologies,
    Installation,
    Usage,
    Screenshots,
    Api,
    /// Expands to one rendered block per user-defined section.
    Custom,
    Roadmap,
    Changelog,
    Faq,
    Contributing,
    License,
    Author,
    Support,
}

impl SectionKind {
    /// All sections in document order.
    pub fn all() -> &'static [SectionKind] {
        &[
            SectionKind::Header,
            SectionKind::Overview,
            SectionKind::TableOfContents,
            SectionKind::Features,
            SectionKind::Technologies,
            SectionKind::Installation,
            SectionKind::Usage,
            SectionKind::Screenshots,
            SectionKind::Api,
            SectionKind::Custom,
            SectionKind::Roadmap,
            SectionKind::Changelog,
            SectionKind::Faq,
            SectionKind::Contributing,
            SectionKind::License,
            SectionKind::Author,
            SectionKind::Support,
        ]
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            SectionKind::Header          => "sections/header.md.tera",
            SectionKind::Overview        => "sections/overview.md.tera",
            SectionKind::TableOfContents => "sections/toc.md.tera",
            SectionKind::Features        => "sections/features.md.tera",
            SectionKind::Technologies    => "sections/technologies.md.tera",
            SectionKind::Installation    => "sections/installation.md.tera",
            SectionKind::Usage           => "sections/usage.md.tera",
            SectionKind::Screenshots     => "sections/screenshots.md.tera",
            SectionKind::Api             => "sections/api.md.tera",
            SectionKind::Custom          => "sections/custom.md.tera",
            SectionKind::Roadmap         => "sections/roadmap.md.tera",
            SectionKind::Changelog       => "sections/changelog.md.tera",
            SectionKind::Faq             => "sections/faq.md.tera",
            SectionKind::Contributing    => "sections/contributing.md.tera",
            SectionKind::License         => "sections/license.md.tera",
            SectionKind::Author          => "sections/author.md.tera",
            SectionKind::Support         => "sections/support.md.tera",
        }
    }

    /// Whether `flags` enable this section. Sections without a flag always render.
    pub fn is_enabled(&self, flags: &SectionFlags) -> bool {
        match self {
            SectionKind::TableOfContents => flags.table_of_contents,
            SectionKind::Installation => flags.installation,
            SectionKind::Usage => flags.usage,
            SectionKind::Screenshots => flags.screenshots,
            SectionKind::Api => flags.api,
            SectionKind::Roadmap => flags.roadmap,
            SectionKind::Changelog => flags.changelog,
            SectionKind::Faq => flags.faq,
            SectionKind::Contributing => flags.contributing,
            SectionKind::License => flags.license,
            SectionKind::Header
            | SectionKind::Overview
            | SectionKind::Features
            | SectionKind::Technologies
            | SectionKind::Custom
            | SectionKind::Author
            | SectionKind::Support => true,
        }
    }

    /// Level-two heading emitted by the embedded template, or `None` for
    /// sections without a fixed heading.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            SectionKind::Header | SectionKind::Custom => None,
            SectionKind::Overview => Some("🌟 Overview"),
            SectionKind::TableOfContents => Some("📑 Table of Contents"),
            SectionKind::Features => Some("✨ Features"),
            SectionKind::Technologies => Some("🛠️ Technologies Used"),
            SectionKind::Installation => Some("📦 Installation"),
            SectionKind::Usage => Some("🎯 Usage"),
            SectionKind::Screenshots => Some("📸 Screenshots"),
            SectionKind::Api => Some("📖 API Reference"),
            SectionKind::Roadmap => Some("🗺️ Roadmap"),
            SectionKind::Changelog => Some("📝 Changelog"),
            SectionKind::Faq => Some("❓ FAQ"),
            SectionKind::Contributing => Some("🤝 Contributing"),
            SectionKind::License => Some("📄 License"),
            SectionKind::Author => Some("👨‍💻 Author"),
            SectionKind::Support => Some("⭐ Show your support"),
        }
    }

    /// Whether the table of contents links to this section.
    pub fn in_table_of_contents(&self) -> bool {
        !matches!(
            self,
            SectionKind::Header
                | SectionKind::Overview
                | SectionKind::TableOfContents
                | SectionKind::Support
        )
    }
}

/// Heading text without its leading emoji: `"🛠️ Technologies Used"` → `"Technologies Used"`.
pub fn plain_title(heading: &str) -> &str {
    heading
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .trim_end()
}

/// GitHub-style heading anchor: lowercase, drop punctuation and symbols,
/// spaces become `-`.
pub fn heading_anchor(heading: &str) -> String {
    heading
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}
