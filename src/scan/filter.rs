use std::path::Path;

/// OS metadata files that never count as assets
pub const DEFAULT_IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Whether a file found during the walk should be reported.
pub fn should_include_file(path: &Path, ignored: &[String]) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => !ignored.iter().any(|i| i == name),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_IGNORED_FILES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ds_store_skipped() {
        assert!(!should_include_file(Path::new("assets/.DS_Store"), &defaults()));
        assert!(!should_include_file(Path::new("assets/a/b/.DS_Store"), &defaults()));
    }

    #[test]
    fn test_regular_files_kept() {
        assert!(should_include_file(Path::new("assets/a.png"), &defaults()));
        assert!(should_include_file(Path::new("assets/.env.json"), &defaults()));
    }

    #[test]
    fn test_custom_ignore_list() {
        let ignored = vec!["Thumbs.db".to_string()];
        assert!(!should_include_file(Path::new("assets/Thumbs.db"), &ignored));
        assert!(should_include_file(Path::new("assets/.DS_Store"), &ignored));
    }
}
