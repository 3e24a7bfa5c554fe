//! Error types for readmegen-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while generating a README.
///
/// With the embedded templates generation cannot fail; these surface problems
/// in user-supplied template overrides.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}
