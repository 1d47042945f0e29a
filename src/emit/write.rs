use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{AssetError, Result};

/// What happened to a target file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    Created,
    Patched,
    Unchanged,
}

impl WriteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Patched => "patched",
            WriteOutcome::Unchanged => "unchanged",
        }
    }
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AssetError::read(path, e))
}

/// Replace `path` with `content` through a temp file in the same directory.
///
/// Either the old or the new content is on disk at any time. A symlinked
/// target is resolved first so the link itself stays in place.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let resolved = if path.exists() {
        fs::canonicalize(path).map_err(|e| AssetError::write(path, e))?
    } else {
        path.to_path_buf()
    };
    let path = resolved.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| AssetError::write(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AssetError::write(path, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| AssetError::write(path, e))?;

    // Temp files are created 0600; keep the replaced file's mode instead
    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    };
    if let Some(permissions) = permissions {
        if let Err(e) = fs::set_permissions(tmp.path(), permissions) {
            warn!(path = %path.display(), error = %e, "could not copy file mode");
        }
    }

    tmp.persist(path)
        .map_err(|e| AssetError::write(path, e.error))?;
    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Write `new` over an existing file holding `old`, skipping identical content.
pub fn write_if_changed(path: &Path, old: &str, new: &str) -> Result<WriteOutcome> {
    if old == new {
        debug!(path = %path.display(), "content unchanged");
        return Ok(WriteOutcome::Unchanged);
    }
    write_atomic(path, new)?;
    Ok(WriteOutcome::Patched)
}
