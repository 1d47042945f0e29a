//! Optional `pubspec_assets.toml` next to `pubspec.yaml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::emit::read_text;
use crate::error::{AssetError, Result};
use crate::scan::DEFAULT_IGNORED_FILES;

pub const CONFIG_FILE_NAME: &str = "pubspec_assets.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Assets folder, relative to the project root
    pub assets_dir: PathBuf,
    /// Manifest file, relative to the project root
    pub manifest: PathBuf,
    /// Root for generated Dart files
    pub source_root: PathBuf,
    /// File names skipped while scanning
    pub ignore: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            manifest: PathBuf::from("pubspec.yaml"),
            source_root: PathBuf::from("lib"),
            ignore: DEFAULT_IGNORED_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| AssetError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load an explicit config file, or `pubspec_assets.toml` in the project
    /// root if present, or the defaults.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = project_root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let config = Self::parse(&read_text(&path)?, &path)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
