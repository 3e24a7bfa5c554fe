//! Tera rendering engine — [`TemplateEngine`] and [`ReadmeGenerator`].
//!
//! # Document assembly
//!
//! Each enabled [`SectionKind`] is rendered from its own template, trailing
//! whitespace is trimmed, and the sections are joined by one blank line. A
//! section whose template renders to nothing is dropped, so an override can
//! blank out a section entirely. The document always ends with a single `\n`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use readmegen_core::{ProjectInfo, StackGroups, TechCatalog};

use crate::context::ReadmeContext;
use crate::error::RenderError;
use crate::section::SectionKind;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("sections/header.md.tera", include_str!("templates/sections/header.md.tera")),
    ("sections/overview.md.tera", include_str!("templates/sections/overview.md.tera")),
    ("sections/toc.md.tera", include_str!("templates/sections/toc.md.tera")),
    ("sections/features.md.tera", include_str!("templates/sections/features.md.tera")),
    (
        "sections/technologies.md.tera",
        include_str!("templates/sections/technologies.md.tera"),
    ),
    (
        "sections/installation.md.tera",
        include_str!("templates/sections/installation.md.tera"),
    ),
    ("sections/usage.md.tera", include_str!("templates/sections/usage.md.tera")),
    (
        "sections/screenshots.md.tera",
        include_str!("templates/sections/screenshots.md.tera"),
    ),
    ("sections/api.md.tera", include_str!("templates/sections/api.md.tera")),
    ("sections/custom.md.tera", include_str!("templates/sections/custom.md.tera")),
    ("sections/roadmap.md.tera", include_str!("templates/sections/roadmap.md.tera")),
    ("sections/changelog.md.tera", include_str!("templates/sections/changelog.md.tera")),
    ("sections/faq.md.tera", include_str!("templates/sections/faq.md.tera")),
    (
        "sections/contributing.md.tera",
        include_str!("templates/sections/contributing.md.tera"),
    ),
    ("sections/license.md.tera", include_str!("templates/sections/license.md.tera")),
    ("sections/author.md.tera", include_str!("templates/sections/author.md.tera")),
    ("sections/support.md.tera", include_str!("templates/sections/support.md.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        tracing::warn!(dir = %dir.display(), "template directory does not exist; using embedded templates");
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!(template = %name, "loaded template override");
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering section templates with optional user overrides.
///
/// `user_template_dir` may contain `.tera` files that override embedded
/// defaults by relative name, e.g. `sections/features.md.tera`. Template
/// names are normalised to lowercase and forward slashes.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Construct a new [`TemplateEngine`], loading embedded templates plus any
    /// overrides found in `user_template_dir`.
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the full document for `ctx`.
    pub fn render(&self, ctx: &ReadmeContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let mut blocks = Vec::new();

        for kind in SectionKind::all() {
            if !kind.is_enabled(&ctx.sections) {
                continue;
            }
            if *kind == SectionKind::Custom {
                for section in &ctx.custom_sections {
                    let mut section_ctx = tera_ctx.clone();
                    section_ctx.insert("section", section);
                    blocks.push(self.tera.render(kind.template_name(), &section_ctx)?);
                }
            } else {
                blocks.push(self.tera.render(kind.template_name(), &tera_ctx)?);
            }
        }

        Ok(assemble(blocks))
    }
}

fn assemble(blocks: Vec<String>) -> String {
    let mut doc = blocks
        .iter()
        .map(|b| b.replace("\r\n", "\n"))
        .map(|b| b.trim_end().to_string())
        .filter(|b| !b.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
    doc.push('\n');
    doc
}

// ---------------------------------------------------------------------------
// ReadmeGenerator
// ---------------------------------------------------------------------------

/// Construction options for [`ReadmeGenerator`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    pub catalog: TechCatalog,
    pub stack_groups: StackGroups,
    pub template_dir: Option<PathBuf>,
}

/// Turns a [`ProjectInfo`] into README markdown.
///
/// Owns its catalog and stack groups; create once and reuse. `generate` is a
/// pure function of its input: the same `ProjectInfo` always yields the same
/// bytes.
pub struct ReadmeGenerator {
    engine: TemplateEngine,
    catalog: TechCatalog,
    stack_groups: StackGroups,
}

impl ReadmeGenerator {
    /// Construct a [`ReadmeGenerator`] with the built-in catalog and embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_options(GeneratorOptions::default())
    }

    pub fn with_options(options: GeneratorOptions) -> Result<Self, RenderError> {
        Ok(ReadmeGenerator {
            engine: TemplateEngine::new(options.template_dir.as_deref())?,
            catalog: options.catalog,
            stack_groups: options.stack_groups,
        })
    }

    pub fn catalog(&self) -> &TechCatalog {
        &self.catalog
    }

    /// The resolved rendering payload for `info`.
    pub fn context(&self, info: &ProjectInfo) -> ReadmeContext {
        ReadmeContext::from_project(info, &self.catalog, &self.stack_groups)
    }

    /// Render the README for `info`.
    pub fn generate(&self, info: &ProjectInfo) -> Result<String, RenderError> {
        let ctx = self.context(info);
        let markdown = self.engine.render(&ctx)?;
        tracing::debug!(title = %ctx.identity.title, bytes = markdown.len(), "generated readme");
        Ok(markdown)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
