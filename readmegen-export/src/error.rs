//! Error types for readmegen-export.

use std::path::PathBuf;

use thiserror::Error;

use readmegen_core::CoreError;
use readmegen_renderer::RenderError;

/// All errors that can arise while exporting a README.
#[derive(Debug, Error)]
pub enum ExportError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error loading the project file.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`ExportError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ExportError {
    ExportError::Io {
        path: path.into(),
        source,
    }
}
