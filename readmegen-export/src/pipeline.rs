//! Shared generate pipeline used by the CLI commands.
//!
//! project file → config defaults → generator (catalog + config extensions +
//! template overrides) → render → print / write / diff.

use std::path::{Path, PathBuf};

use readmegen_core::{project, Config, ProjectInfo, StackGroups};
use readmegen_renderer::{GeneratorOptions, ReadmeGenerator};

use crate::diff::{diff_readme, FileDiff};
use crate::error::ExportError;
use crate::writer::{write_readme, WriteResult, README_FILE_NAME};

/// What to do with the rendered README.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Return the markdown without touching the filesystem.
    Print,
    /// Write the output file (or report what would be written).
    Write { dry_run: bool },
    /// Diff the output file against the rendered markdown.
    Diff,
}

/// A single pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub project: PathBuf,
    /// Explicit output path; overrides the config and the default.
    pub output: Option<PathBuf>,
    /// Explicit template override directory; overrides the config.
    pub templates: Option<PathBuf>,
    pub action: Action,
}

/// Result of [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Printed(String),
    Written(WriteResult),
    Diffed {
        path: PathBuf,
        diff: Option<FileDiff>,
    },
}

/// Load the project file named by `request` and fill empty fields from `config`.
pub fn load_with_defaults(request: &Request, config: &Config) -> Result<ProjectInfo, ExportError> {
    let mut info = project::load_project(&request.project)?;
    config.defaults.fill_missing(&mut info);
    if !info.technologies.is_empty() {
        tracing::warn!(
            count = info.technologies.len(),
            "`technologies` is not rendered; select badges under `badges.tech` instead"
        );
    }
    Ok(info)
}

/// Build a generator with the config's catalog extensions and template directory.
pub fn generator(request: &Request, config: &Config) -> Result<ReadmeGenerator, ExportError> {
    let template_dir = request
        .templates
        .clone()
        .or_else(|| config.templates_dir.clone());
    Ok(ReadmeGenerator::with_options(GeneratorOptions {
        catalog: config.catalog(),
        stack_groups: StackGroups::builtin(),
        template_dir,
    })?)
}

/// Output path: `--output` as given, else the config's `output`, else
/// `README.md`. Relative config/default paths resolve next to the project file.
pub fn output_path(request: &Request, config: &Config) -> PathBuf {
    if let Some(output) = &request.output {
        return output.clone();
    }
    let name = config
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(README_FILE_NAME));
    if name.is_absolute() {
        return name;
    }
    match request.project.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(name),
        _ => name,
    }
}

/// Run the pipeline for `request`.
pub fn run(request: &Request, config: &Config) -> Result<Outcome, ExportError> {
    let info = load_with_defaults(request, config)?;
    let markdown = generator(request, config)?.generate(&info)?;

    match request.action {
        Action::Print => Ok(Outcome::Printed(markdown)),
        Action::Write { dry_run } => {
            let path = output_path(request, config);
            Ok(Outcome::Written(write_readme(&path, &markdown, dry_run)?))
        }
        Action::Diff => {
            let path = output_path(request, config);
            let diff = diff_readme(&path, &markdown)?;
            Ok(Outcome::Diffed { path, diff })
        }
    }
}

/// [`run`] with the user's config from `home`.
pub fn run_at(home: &Path, request: &Request) -> Result<Outcome, ExportError> {
    let config = readmegen_core::config::load_config_at(home)?;
    run(request, &config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use readmegen_core::{project::save_project, ProjectDefaults};
    use tempfile::TempDir;

    use super::*;

    fn project_in(dir: &TempDir, info: &ProjectInfo) -> PathBuf {
        let path = dir.path().join("readme.yaml");
        save_project(&path, info).expect("save");
        path
    }

    fn request(project: PathBuf, action: Action) -> Request {
        Request {
            project,
            output: None,
            templates: None,
            action,
        }
    }

    #[test]
    fn print_returns_markdown_without_writing() {
        let dir = TempDir::new().expect("dir");
        let project = project_in(&dir, &ProjectInfo { title: "Demo".into(), ..ProjectInfo::default() });
        let outcome = run(&request(project, Action::Print), &Config::default()).expect("run");
        match outcome {
            Outcome::Printed(md) => assert!(md.contains("# Demo\n")),
            other => panic!("expected printed, got {other:?}"),
        }
        assert!(!dir.path().join(README_FILE_NAME).exists());
    }

    #[test]
    fn write_lands_next_to_project_then_is_unchanged() {
        let dir = TempDir::new().expect("dir");
        let project = project_in(&dir, &ProjectInfo::default());
        let req = request(project, Action::Write { dry_run: false });

        let first = run(&req, &Config::default()).expect("first");
        let expected = dir.path().join(README_FILE_NAME);
        assert_eq!(first, Outcome::Written(WriteResult::Written { path: expected.clone() }));

        let second = run(&req, &Config::default()).expect("second");
        assert_eq!(second, Outcome::Written(WriteResult::Unchanged { path: expected }));
    }

    #[test]
    fn config_defaults_fill_only_empty_fields() {
        let dir = TempDir::new().expect("dir");
        let project = project_in(
            &dir,
            &ProjectInfo { author: "someone".into(), ..ProjectInfo::default() },
        );
        let config = Config {
            defaults: ProjectDefaults {
                author: Some("octocat".into()),
                github_url: Some("https://github.com/octocat/demo".into()),
                ..ProjectDefaults::default()
            },
            ..Config::default()
        };
        let info = load_with_defaults(&request(project, Action::Print), &config).expect("load");
        assert_eq!(info.author, "someone");
        assert_eq!(info.github_url, "https://github.com/octocat/demo");
    }

    #[test]
    fn explicit_templates_override_config_dir() {
        let dir = TempDir::new().expect("dir");
        let project = project_in(&dir, &ProjectInfo::default());
        let overrides = dir.path().join("tpl").join("sections");
        fs::create_dir_all(&overrides).expect("mkdir");
        fs::write(overrides.join("usage.md.tera"), "## Running\n").expect("write");

        let mut req = request(project, Action::Print);
        req.templates = Some(dir.path().join("tpl"));
        let config = Config {
            templates_dir: Some(dir.path().join("missing")),
            ..Config::default()
        };
        match run(&req, &config).expect("run") {
            Outcome::Printed(md) => {
                assert!(md.contains("## Running\n"));
                assert!(!md.contains("## 🎯 Usage"));
            }
            other => panic!("expected printed, got {other:?}"),
        }
    }

    #[test]
    fn diff_reports_missing_output() {
        let dir = TempDir::new().expect("dir");
        let project = project_in(&dir, &ProjectInfo::default());
        let mut req = request(project, Action::Diff);
        req.output = Some(dir.path().join("docs.md"));
        match run(&req, &Config::default()).expect("run") {
            Outcome::Diffed { path, diff } => {
                assert_eq!(path, dir.path().join("docs.md"));
                assert!(diff.is_some());
            }
            other => panic!("expected diff, got {other:?}"),
        }
    }

    #[test]
    fn output_path_resolution() {
        let req = request(PathBuf::from("proj/readme.yaml"), Action::Print);
        assert_eq!(output_path(&req, &Config::default()), PathBuf::from("proj/README.md"));

        let config = Config { output: Some(PathBuf::from("docs/INDEX.md")), ..Config::default() };
        assert_eq!(output_path(&req, &config), PathBuf::from("proj/docs/INDEX.md"));

        let bare = request(PathBuf::from("readme.yaml"), Action::Print);
        assert_eq!(output_path(&bare, &Config::default()), PathBuf::from("README.md"));
    }

    #[test]
    fn missing_project_is_an_error() {
        let dir = TempDir::new().expect("dir");
        let err = run(&request(dir.path().join("nope.yaml"), Action::Print), &Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("project file not found"));
    }
}
