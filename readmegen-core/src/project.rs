//! Project files: the on-disk form of a [`ProjectInfo`].
//!
//! # Formats
//!
//! ```text
//! readme.yaml   → serde_yaml   (default; any extension other than .json)
//! readme.json   → serde_json
//! ```
//!
//! Saves are atomic: serialize → `<file>.tmp` sibling → `rename`. The tmp
//! file always lives next to the target so the rename never crosses
//! filesystems.

use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::types::ProjectInfo;

/// File name used when no project path is given.
pub const DEFAULT_PROJECT_FILE: &str = "readme.yaml";

/// Serialization format of a project file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFormat {
    Yaml,
    Json,
}

impl ProjectFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ProjectFormat::Json,
            _ => ProjectFormat::Yaml,
        }
    }

    fn parse(self, path: &Path, contents: &str) -> Result<ProjectInfo, CoreError> {
        let parsed = match self {
            ProjectFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
            ProjectFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| CoreError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    fn render(self, info: &ProjectInfo) -> Result<String, CoreError> {
        Ok(match self {
            ProjectFormat::Yaml => serde_yaml::to_string(info)?,
            ProjectFormat::Json => {
                let mut json = serde_json::to_string_pretty(info)?;
                json.push('\n');
                json
            }
        })
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load a project file.
///
/// Returns `CoreError::ProjectNotFound` if absent,
/// `CoreError::Parse` (with path + decoder context) if malformed.
pub fn load_project(path: &Path) -> Result<ProjectInfo, CoreError> {
    if !path.exists() {
        return Err(CoreError::ProjectNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let info = ProjectFormat::from_path(path).parse(path, &contents)?;
    tracing::debug!(path = %path.display(), title = %info.title, "loaded project file");
    Ok(info)
}

// ---------------------------------------------------------------------------
// Save (atomic)
// ---------------------------------------------------------------------------

/// Atomically write `info` to `path` in the format its extension selects.
pub fn save_project(path: &Path, info: &ProjectInfo) -> Result<(), CoreError> {
    let body = ProjectFormat::from_path(path).render(info)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let tmp_path = tmp_sibling(path);
    std::fs::write(&tmp_path, body)?;
    if let Err(e) = std::fs::rename(&tmp_path, path) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

/// Result of [`init_project`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// A new file was written from the seed.
    Created(ProjectInfo),
    /// A file was already present; its contents are returned unchanged.
    Existing(ProjectInfo),
}

impl InitOutcome {
    pub fn info(&self) -> &ProjectInfo {
        match self {
            InitOutcome::Created(info) | InitOutcome::Existing(info) => info,
        }
    }
}

/// Write a starter project file at `path`.
///
/// Idempotent unless `force` is set: an existing file is loaded and returned.
pub fn init_project(
    path: &Path,
    seed: ProjectInfo,
    force: bool,
) -> Result<InitOutcome, CoreError> {
    if path.exists() && !force {
        return load_project(path).map(InitOutcome::Existing);
    }
    save_project(path, &seed)?;
    Ok(InitOutcome::Created(seed))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Badge;
    use tempfile::TempDir;

    fn sample() -> ProjectInfo {
        let mut info = ProjectInfo {
            title: "Pocket Ledger".into(),
            author: "octocat".into(),
            ..ProjectInfo::default()
        };
        info.badges.add_tech(Badge::new("Rust", "000000"));
        info.add_feature("Double-entry bookkeeping");
        info
    }

    #[test]
    fn format_selected_by_extension() {
        assert_eq!(ProjectFormat::from_path(Path::new("a/readme.json")), ProjectFormat::Json);
        assert_eq!(ProjectFormat::from_path(Path::new("a/readme.JSON")), ProjectFormat::Json);
        assert_eq!(ProjectFormat::from_path(Path::new("a/readme.yaml")), ProjectFormat::Yaml);
        assert_eq!(ProjectFormat::from_path(Path::new("a/readme")), ProjectFormat::Yaml);
    }

    #[test]
    fn save_and_load_yaml_roundtrip() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("readme.yaml");
        save_project(&path, &sample()).expect("save");
        assert_eq!(load_project(&path).expect("load"), sample());
    }

    #[test]
    fn save_and_load_json_roundtrip() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("nested").join("readme.json");
        save_project(&path, &sample()).expect("save");
        let raw = std::fs::read_to_string(&path).expect("read");
        assert!(raw.contains("\"githubUrl\""), "json keys must be camelCase");
        assert_eq!(load_project(&path).expect("load"), sample());
    }

    #[test]
    fn save_cleans_up_tmp() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("readme.yaml");
        save_project(&path, &sample()).expect("save");
        assert!(!dir.path().join("readme.yaml.tmp").exists());
    }

    #[test]
    fn init_is_idempotent_without_force() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("readme.yaml");
        let first = init_project(&path, sample(), false).expect("init");
        assert!(matches!(first, InitOutcome::Created(_)));

        let other = ProjectInfo {
            title: "Something Else".into(),
            ..ProjectInfo::default()
        };
        let second = init_project(&path, other.clone(), false).expect("init again");
        assert!(matches!(second, InitOutcome::Existing(_)));
        assert_eq!(second.info().title, "Pocket Ledger");

        let forced = init_project(&path, other, true).expect("force");
        assert_eq!(forced.info().title, "Something Else");
        assert_eq!(load_project(&path).expect("load").title, "Something Else");
    }

    #[test]
    fn load_missing_returns_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let err = load_project(&dir.path().join("readme.yaml")).unwrap_err();
        assert!(matches!(err, CoreError::ProjectNotFound { .. }));
    }
}
