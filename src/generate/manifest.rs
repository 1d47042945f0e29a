use std::path::Path;

use tracing::info;

use super::region::MANIFEST_REGION;
use crate::emit::{read_text, write_if_changed, WriteOutcome};
use crate::error::{AssetError, Result};

/// Rewrite the generated region of manifest text, `None` if the markers are absent.
pub fn patch_manifest(content: &str, asset_block: &str) -> Option<String> {
    MANIFEST_REGION.patch(content, asset_block)
}

/// Patch the manifest file in place. The file is left untouched on any error.
pub fn update_manifest(path: &Path, asset_block: &str) -> Result<WriteOutcome> {
    let content = read_text(path)?;
    let patched =
        patch_manifest(&content, asset_block).ok_or_else(|| AssetError::MissingMarkerPair {
            kind: MANIFEST_REGION.kind,
            path: path.to_path_buf(),
            start: MANIFEST_REGION.start,
            end: MANIFEST_REGION.end,
        })?;

    let outcome = write_if_changed(path, &content, &patched)?;
    info!(path = %path.display(), outcome = outcome.as_str(), "manifest updated");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const PUBSPEC: &str = "name: demo\n\nflutter:\n  uses-material-design: true\n  # === Generated Code Start ===\n  # === Generated Code End ===\n";

    #[test]
    fn test_update_twice_is_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pubspec.yaml");
        fs::write(&path, PUBSPEC).unwrap();
        let block = "  assets:\n    - assets/icons/logo.png\n";

        assert_eq!(update_manifest(&path, block).unwrap(), WriteOutcome::Patched);
        let first = fs::read_to_string(&path).unwrap();
        assert_eq!(update_manifest(&path, block).unwrap(), WriteOutcome::Unchanged);
        let second = fs::read_to_string(&path).unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with("name: demo\n\nflutter:\n  uses-material-design: true\n"));
        assert!(first.contains("  assets:\n    - assets/icons/logo.png\n  # === Generated Code End ==="));
    }

    #[test]
    fn test_missing_markers_leave_file_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pubspec.yaml");
        let original = "name: demo\nflutter:\n  uses-material-design: true\n";
        fs::write(&path, original).unwrap();

        let err = update_manifest(&path, "  assets:\n").unwrap_err();
        assert!(matches!(
            err,
            AssetError::MissingMarkerPair {
                kind: crate::error::MarkerKind::Manifest,
                ..
            }
        ));
        assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
    }

    #[test]
    fn test_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let err = update_manifest(&temp.path().join("pubspec.yaml"), "").unwrap_err();
        assert!(matches!(err, AssetError::Read { .. }));
    }
}
