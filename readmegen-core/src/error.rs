//! Error types for readmegen-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from project-file and config operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure (permission denied, read-only directory, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (write/save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error (write/save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parse error on load — includes the file path and the decoder's line context.
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.readmegen/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The project file did not exist at the expected path.
    #[error("project file not found at {path}")]
    ProjectNotFound { path: PathBuf },
}
