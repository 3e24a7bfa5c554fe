//! User configuration at `~/.readmegen/config.yaml`.
//!
//! ```yaml
//! defaults:
//!   author: octocat
//!   github_url: https://github.com/octocat/app
//!   license: Apache-2.0
//! templates_dir: /home/me/readme-templates
//! output: README.md
//! technologies:
//!   Internal:
//!     - { name: Foo, color: "123456", logo: foo }
//! ```
//!
//! Every function has two forms, following the same pattern throughout:
//! - `fn_at(home: &Path, …)` — explicit home; used in tests with `TempDir`
//! - `fn(…)` — derives home from `dirs::home_dir()`, delegates to `_at`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{TechCatalog, TechEntry};
use crate::error::CoreError;
use crate::types::ProjectInfo;

/// Values that fill empty project fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectDefaults {
    pub author: Option<String>,
    pub github_url: Option<String>,
    pub demo: Option<String>,
    pub license: Option<String>,
}

impl ProjectDefaults {
    /// Fill empty fields of `info`. Fields that are already set are never touched.
    pub fn fill_missing(&self, info: &mut ProjectInfo) {
        fill(&mut info.author, &self.author);
        fill(&mut info.github_url, &self.github_url);
        fill(&mut info.demo, &self.demo);
        fill(&mut info.license, &self.license);
    }

    /// A fresh project seeded from these defaults (used by `init`).
    pub fn seed(&self) -> ProjectInfo {
        let mut info = ProjectInfo::default();
        if let Some(license) = self.license.as_ref().filter(|l| !l.is_empty()) {
            info.license = license.clone();
            info.badges.license = license.clone();
        }
        self.fill_missing(&mut info);
        info
    }
}

fn fill(field: &mut String, default: &Option<String>) {
    if field.is_empty() {
        if let Some(value) = default {
            field.clone_from(value);
        }
    }
}

/// Parsed `config.yaml`. A missing file is equivalent to `Config::default()`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: ProjectDefaults,
    /// Directory of `.tera` files overriding the embedded README templates.
    pub templates_dir: Option<PathBuf>,
    /// Output file used when `--output` is not given.
    pub output: Option<PathBuf>,
    /// Extra catalog entries, keyed by category.
    pub technologies: BTreeMap<String, Vec<TechEntry>>,
}

impl Config {
    /// The built-in catalog extended with this config's technologies.
    pub fn catalog(&self) -> TechCatalog {
        let mut catalog = TechCatalog::builtin();
        for (category, entries) in &self.technologies {
            catalog.extend(category, entries.iter().cloned());
        }
        catalog
    }
}

// ---------------------------------------------------------------------------
// Paths + load
// ---------------------------------------------------------------------------

/// `<home>/.readmegen/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".readmegen").join("config.yaml")
}

/// Load `<home>/.readmegen/config.yaml`, or the default config if absent.
pub fn load_config_at(home: &Path) -> Result<Config, CoreError> {
    let path = config_path_at(home);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(&path)?;
    serde_yaml::from_str(&contents).map_err(|e| CoreError::Parse {
        path,
        message: e.to_string(),
    })
}

/// `load_config_at` convenience wrapper.
pub fn load_config() -> Result<Config, CoreError> {
    load_config_at(&home()?)
}

fn home() -> Result<PathBuf, CoreError> {
    dirs::home_dir().ok_or(CoreError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
