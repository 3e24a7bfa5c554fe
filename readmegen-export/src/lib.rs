//! # readmegen-export
//!
//! Hash-gated atomic README writer, unified diff against the file on disk,
//! and the [`pipeline`] that ties project file, config and renderer together.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use diff::{diff_readme, FileDiff};
pub use error::ExportError;
pub use pipeline::{Action, Outcome, Request};
pub use writer::{write_readme, WriteResult, README_FILE_NAME};
