use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::paths::TEMP_SUFFIX;
use crate::error::{HypenoteError, Result};

/// Create `dir` and its parents if needed.
///
/// Failure means the vault cannot hold notes at all, so it is reported as
/// storage being unavailable rather than a per-file error.
pub(crate) fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| HypenoteError::storage_unavailable(Some(dir), e))
}

/// Sibling path used while writing `path`
pub(crate) fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(OsString::new);
    name.push(TEMP_SUFFIX);
    path.with_file_name(name)
}

fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

/// Write `content` to `path` via a synced temp file and a rename over the target.
///
/// The target is never removed first: readers see either the old or the new
/// file. The temp file is cleaned up on failure.
pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let tmp = temp_path(path);

    let result = write_synced(&tmp, content).and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = result {
        if tmp.exists() {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                debug!(path = %tmp.display(), error = %cleanup, "Failed to remove temp file");
            }
        }
        return Err(HypenoteError::io_operation("write", path.display(), e));
    }

    Ok(())
}

/// Move `from` to `to`, mapping failures to a targeted error
pub(crate) fn move_file(operation: &str, from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| HypenoteError::io_operation(operation, from.display(), e))
}

/// Hidden files (dotfiles) are never treated as notes
pub(crate) fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
