use serde::Serialize;
use std::path::{Path, PathBuf};

/// Image extensions Flutter can decode (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "bmp", "exr", "gif", "jpeg", "png", "psd", "pvrtc", "tga", "tiff", "webp", "svg",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Json,
    Other,
}

impl AssetKind {
    pub fn from_extension(ext: &str) -> Self {
        let ext = ext.to_ascii_lowercase();
        if ext == "json" {
            AssetKind::Json
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            AssetKind::Image
        } else {
            AssetKind::Other
        }
    }

    pub fn from_file_name(name: &str) -> Self {
        match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => AssetKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Json => "json",
            AssetKind::Other => "other",
        }
    }
}

/// One file discovered below the assets folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetRecord {
    pub absolute_path: PathBuf,
    /// Relative to the project root, always `/`-separated
    pub relative_path: String,
    pub file_name: String,
    pub kind: AssetKind,
}

impl AssetRecord {
    pub fn new(absolute_path: PathBuf, project_root: &Path) -> Self {
        let relative = absolute_path
            .strip_prefix(project_root)
            .unwrap_or(&absolute_path);
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let file_name = absolute_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = AssetKind::from_file_name(&file_name);

        Self {
            absolute_path,
            relative_path,
            file_name,
            kind,
        }
    }
}
