use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::filter::should_include_file;
use crate::error::{AssetError, Result};

/// Recursively list every file below `root`, sorted by path.
///
/// Directories are descended but not returned. Symlinks are followed; link
/// loops and dangling links are skipped with a warning. A missing root is an
/// error; an empty tree yields an empty list.
pub fn scan_directory(root: &Path, ignored: &[String]) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AssetError::MissingAssetsFolder(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                if let Some(ancestor) = e.loop_ancestor() {
                    warn!(path = %path.display(), ancestor = %ancestor.display(), "symlink loop skipped");
                    continue;
                }
                let dangling = e
                    .io_error()
                    .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
                if dangling {
                    warn!(path = %path.display(), "dangling symlink skipped");
                    continue;
                }
                return Err(AssetError::read(path, e.into()));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !should_include_file(entry.path(), ignored) {
            debug!(path = %entry.path().display(), "ignored");
            continue;
        }
        files.push(entry.into_path());
    }

    files.sort();
    debug!(root = %root.display(), count = files.len(), "scanned assets");
    Ok(files)
}
