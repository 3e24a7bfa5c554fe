use readmegen_core::{Badge, CustomSection, ProjectInfo, SocialLink, SocialPlatform, TechCatalog, TechEntry};
use readmegen_renderer::{GeneratorOptions, ReadmeGenerator, SectionKind};
use rstest::rstest;
use tempfile::TempDir;

fn generate(info: &ProjectInfo) -> String {
    ReadmeGenerator::new()
        .expect("generator")
        .generate(info)
        .expect("generate")
}

fn with_tech(names: &[(&str, &str)]) -> ProjectInfo {
    let mut info = ProjectInfo::default();
    for (text, color) in names {
        info.badges.add_tech(Badge::new(*text, *color));
    }
    info
}

fn stack_line<'a>(doc: &'a str, label: &str) -> &'a str {
    let prefix = format!("**{label}**: ");
    doc.lines()
        .find(|l| l.starts_with(&prefix))
        .unwrap_or_else(|| panic!("no stack line for {label}"))
}

// ---------------------------------------------------------------------------
// Title, defaulting, idempotence
// ---------------------------------------------------------------------------

#[rstest]
#[case("", "Your Project Name")]
#[case("Foo", "Foo")]
#[case("Pocket Ledger ✨", "Pocket Ledger ✨")]
fn title_line_is_present(#[case] title: &str, #[case] expected: &str) {
    let info = ProjectInfo { title: title.into(), ..ProjectInfo::default() };
    let doc = generate(&info);
    assert!(doc.contains(&format!("# {expected}\n")));
}

#[test]
fn explicit_title_replaces_placeholder() {
    let doc = generate(&ProjectInfo { title: "Foo".into(), ..ProjectInfo::default() });
    assert!(doc.contains("Foo"));
    assert!(!doc.contains("Your Project Name"));
}

#[test]
fn identical_input_yields_identical_bytes() {
    let mut info = with_tech(&[("React", "61DAFB"), ("C++", "00599C")]);
    info.title = "Twice".into();
    info.badges.add_status(Badge::new("Beta", "orange"));
    let generator = ReadmeGenerator::new().unwrap();
    assert_eq!(generator.generate(&info).unwrap(), generator.generate(&info).unwrap());
}

// ---------------------------------------------------------------------------
// Badges and slug
// ---------------------------------------------------------------------------

#[test]
fn cplusplus_badge_is_encoded_with_catalog_logo() {
    let doc = generate(&with_tech(&[("C++", "00599C")]));
    assert!(doc.contains(
        "https://img.shields.io/badge/C%2B%2B-00599C?style=for-the-badge&logo=cplusplus&logoColor=white"
    ));
}

#[test]
fn slug_drives_clone_dir_and_repo_stats() {
    let info = ProjectInfo {
        title: "My Cool App!".into(),
        author: "octocat".into(),
        ..ProjectInfo::default()
    };
    let doc = generate(&info);
    assert!(doc.contains("cd my-cool-app\n"));
    assert!(doc.contains("https://img.shields.io/github/stars/octocat/my-cool-app?style=for-the-badge&logo=github"));
}

#[test]
fn header_badge_row_orders_version_license_status() {
    let mut info = ProjectInfo::default();
    info.badges.version = "2.3.0".into();
    info.badges.add_status(Badge::new("Under Development", "orange"));
    let doc = generate(&info);
    assert!(doc.contains(
        "![Version](https://img.shields.io/badge/Version-2.3.0-blue?style=for-the-badge) \
         ![License](https://img.shields.io/badge/License-MIT-green?style=for-the-badge) \
         ![Under Development](https://img.shields.io/badge/Status-Under%20Development-orange?style=for-the-badge)\n"
    ));
}

// ---------------------------------------------------------------------------
// Empty state
// ---------------------------------------------------------------------------

#[test]
fn empty_project_is_a_complete_document() {
    let doc = generate(&ProjectInfo::default());
    for heading in [
        "## 🌟 Overview",
        "## 📑 Table of Contents",
        "## ✨ Features",
        "## 🛠️ Technologies Used",
        "### 🏗️ Tech Stack",
        "## 📦 Installation",
        "## 🎯 Usage",
        "## 🤝 Contributing",
        "## 📄 License",
        "## 👨‍💻 Author",
        "## ⭐ Show your support",
    ] {
        assert!(doc.contains(&format!("{heading}\n")), "missing {heading}");
    }
    assert!(doc.contains("A brief description of what your project does and who it's for."));
    assert!(doc.contains("- 🚀 Fast and efficient performance\n"));
    assert!(doc.contains("- ⚡ Easy to use and customize\n"));
    assert!(doc.contains("![Tech Stack](https://img.shields.io/badge/Add-Technologies-blue?style=for-the-badge)"));
    assert!(doc.contains("**Database**: Reliable data storage solutions  \n"));
    assert!(doc.contains("git clone https://github.com/yourusername/your-repo\n"));
    assert!(doc.contains("**YourUsername** - [GitHub](https://github.com/yourusername/your-repo)"));
    assert!(doc.contains("licensed under the MIT License"));
    assert!(doc.contains("Made with ❤️ by [YourUsername]"));
    for leak in ["{{", "}}", "{%", "undefined", "null"] {
        assert!(!doc.contains(leak), "template residue {leak:?} leaked");
    }
}

#[test]
fn sections_are_separated_by_single_blank_lines() {
    let doc = generate(&ProjectInfo::default());
    assert!(doc.starts_with("<div align=\"center\">\n\n# Your Project Name\n"));
    assert!(!doc.contains("\n\n\n"));
    assert!(doc.ends_with("</div>\n"));
}

// ---------------------------------------------------------------------------
// Tech stack categorization
// ---------------------------------------------------------------------------

#[test]
fn stack_groups_with_fallbacks() {
    let doc = generate(&with_tech(&[
        ("React", "61DAFB"),
        ("MongoDB", "47A248"),
        ("Docker", "2496ED"),
    ]));
    assert_eq!(stack_line(&doc, "Frontend"), "**Frontend**: React");
    assert_eq!(stack_line(&doc, "Backend"), "**Backend**: Server-side technologies");
    assert_eq!(stack_line(&doc, "Database"), "**Database**: MongoDB");
    assert_eq!(stack_line(&doc, "DevOps"), "**DevOps**: Docker");
    assert!(!doc.contains("Modern JavaScript frameworks and libraries"));
}

#[test]
fn uncategorized_tech_still_gets_a_badge() {
    let doc = generate(&with_tech(&[("Figma", "F24E1E")]));
    assert!(doc.contains("![Figma](https://img.shields.io/badge/Figma-F24E1E?"));
    assert_eq!(stack_line(&doc, "Frontend"), "**Frontend**: Modern web technologies");
}

// ---------------------------------------------------------------------------
// Section flags, custom sections, social links
// ---------------------------------------------------------------------------

#[test]
fn disabled_flags_remove_headings() {
    let mut info = ProjectInfo::default();
    info.sections.installation = false;
    info.sections.table_of_contents = false;
    info.sections.license = false;
    let doc = generate(&info);
    assert!(!doc.contains("## 📦 Installation"));
    assert!(!doc.contains("## 📑 Table of Contents"));
    assert!(!doc.contains("## 📄 License"));
    assert!(doc.contains("## 🎯 Usage"));
}

#[test]
fn enabled_optional_sections_render_in_order() {
    let mut info = ProjectInfo::default();
    info.sections.api = true;
    info.sections.faq = true;
    info.sections.roadmap = true;
    info.sections.changelog = true;
    info.sections.screenshots = true;
    let doc = generate(&info);
    let order: Vec<usize> = [
        SectionKind::Screenshots,
        SectionKind::Api,
        SectionKind::Roadmap,
        SectionKind::Changelog,
        SectionKind::Faq,
        SectionKind::Contributing,
    ]
    .iter()
    .map(|k| {
        let heading = k.heading().unwrap();
        doc.find(&format!("## {heading}"))
            .unwrap_or_else(|| panic!("missing {heading}"))
    })
    .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "sections out of order: {order:?}");
    assert!(doc.contains("### 1.0.0\n"));
}

#[test]
fn custom_sections_follow_reference_sections() {
    let mut info = ProjectInfo::default();
    info.sections.api = true;
    info.custom_sections = vec![
        CustomSection { title: "Deploying".into(), content: "Push to `main`.".into() },
        CustomSection { title: "Credits".into(), content: "Thanks, all.".into() },
    ];
    let doc = generate(&info);
    let api = doc.find("## 📖 API Reference").unwrap();
    let deploying = doc.find("## Deploying\n\nPush to `main`.").unwrap();
    let credits = doc.find("## Credits\n\nThanks, all.").unwrap();
    let contributing = doc.find("## 🤝 Contributing").unwrap();
    assert!(api < deploying && deploying < credits && credits < contributing);
    assert!(doc.contains("- [Deploying](#deploying)\n"));
}

#[test]
fn contributing_text_replaces_intro_only() {
    let info = ProjectInfo {
        contributing: "Please open an issue first.".into(),
        ..ProjectInfo::default()
    };
    let doc = generate(&info);
    assert!(doc.contains("## 🤝 Contributing\n\nPlease open an issue first.\n\n1. Fork the project\n"));
    assert!(!doc.contains("Contributions are welcome!"));
}

#[test]
fn social_links_join_under_author() {
    let mut info = ProjectInfo { author: "octocat".into(), ..ProjectInfo::default() };
    info.social_links = vec![
        SocialLink {
            platform: SocialPlatform::Linkedin,
            username: "octo".into(),
            url: "https://linkedin.com/in/octo".into(),
        },
        SocialLink {
            platform: SocialPlatform::Website,
            username: String::new(),
            url: "https://octo.dev".into(),
        },
    ];
    let doc = generate(&info);
    assert!(doc.contains(
        "**octocat** - [GitHub](https://github.com/yourusername/your-repo)\n\n\
         [LinkedIn (octo)](https://linkedin.com/in/octo) · [Website](https://octo.dev)\n\n## ⭐"
    ));
}

// ---------------------------------------------------------------------------
// Catalog and template overrides
// ---------------------------------------------------------------------------

#[test]
fn extended_catalog_supplies_logo() {
    let mut catalog = TechCatalog::builtin();
    catalog.extend(
        "Internal",
        [TechEntry { name: "Widgetry".into(), color: "123456".into(), logo: "widgets".into() }],
    );
    let generator = ReadmeGenerator::with_options(GeneratorOptions {
        catalog,
        ..GeneratorOptions::default()
    })
    .unwrap();
    let doc = generator.generate(&with_tech(&[("Widgetry", "123456")])).unwrap();
    assert!(doc.contains("&logo=widgets&"));
}

#[test]
fn user_override_replaces_only_named_section() {
    let dir = TempDir::new().unwrap();
    let sections = dir.path().join("sections");
    std::fs::create_dir_all(&sections).unwrap();
    std::fs::write(
        sections.join("features.md.tera"),
        "## Highlights\r\n\r\n{% for f in features %}* {{ f }}\r\n{% endfor %}",
    )
    .unwrap();
    std::fs::write(sections.join("notes.txt"), "ignored").unwrap();

    let generator = ReadmeGenerator::with_options(GeneratorOptions {
        template_dir: Some(dir.path().to_path_buf()),
        ..GeneratorOptions::default()
    })
    .unwrap();
    let doc = generator.generate(&ProjectInfo::default()).unwrap();
    assert!(doc.contains("## Highlights\n\n* 🚀 Fast and efficient performance\n"));
    assert!(!doc.contains("## ✨ Features"));
    assert!(!doc.contains('\r'));
    assert!(doc.contains("## 🛠️ Technologies Used"));
}

#[test]
fn empty_override_drops_section() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("sections")).unwrap();
    std::fs::write(dir.path().join("sections").join("overview.md.tera"), "").unwrap();
    let generator = ReadmeGenerator::with_options(GeneratorOptions {
        template_dir: Some(dir.path().to_path_buf()),
        ..GeneratorOptions::default()
    })
    .unwrap();
    let doc = generator.generate(&ProjectInfo::default()).unwrap();
    assert!(!doc.contains("Overview"));
    assert!(!doc.contains("\n\n\n"));
}

#[test]
fn broken_override_is_an_error() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("sections")).unwrap();
    std::fs::write(dir.path().join("sections").join("usage.md.tera"), "{% if %}").unwrap();
    let result = ReadmeGenerator::with_options(GeneratorOptions {
        template_dir: Some(dir.path().to_path_buf()),
        ..GeneratorOptions::default()
    });
    assert!(result.is_err());
}
