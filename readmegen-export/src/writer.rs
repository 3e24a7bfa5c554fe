//! Hash-gated atomic README writer.
//!
//! ## `write_readme` protocol
//!
//! 1. Normalise line endings of the rendered content to LF.
//! 2. SHA-256 hash the rendered content and the file currently on disk
//!    (its CRLF line endings folded to LF).
//! 3. Identical hashes → `Unchanged`; the file (and its mtime) is untouched.
//! 4. Dry-run → `WouldWrite`; nothing is created.
//! 5. Write to `<path>.readmegen.tmp`.
//! 6. Rename to the final path (atomic on POSIX). On failure the tmp file
//!    is removed and the original is left intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{io_err, ExportError};

/// Default output file name.
pub const README_FILE_NAME: &str = "README.md";

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of a README write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped — content on disk already matches.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

/// Hex-encoded SHA-256 of `bytes`.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Hash of the file on disk with CRLF folded to LF, matching `diff_readme`.
/// Non-UTF-8 files are hashed as raw bytes.
fn disk_hash(path: &Path) -> Result<Option<String>, ExportError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(io_err(path, err)),
    };
    let digest = match String::from_utf8(bytes) {
        Ok(text) => content_hash(text.replace("\r\n", "\n").as_bytes()),
        Err(err) => content_hash(err.as_bytes()),
    };
    Ok(Some(digest))
}

// ---------------------------------------------------------------------------
// write_readme
// ---------------------------------------------------------------------------

/// Atomically write rendered README `content` to `path`.
pub fn write_readme(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, ExportError> {
    let tmp = PathBuf::from(format!("{}.readmegen.tmp", path.display()));
    write_readme_with_tmp(path, content, dry_run, &tmp)
}

fn write_readme_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, ExportError> {
    let normalized = content.replace("\r\n", "\n");
    let content = normalized.as_str();

    let digest = content_hash(content.as_bytes());
    if disk_hash(path)?.as_deref() == Some(digest.as_str()) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
