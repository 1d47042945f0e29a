use serde::Serialize;
use std::path::Path;

use super::WriteOutcome;
use crate::analyze::AssetsResult;
use crate::types::AssetKind;

/// Machine-readable summary of one run, printed with `--json`.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub version: String,
    pub mode: String,
    pub project: String,
    pub assets: AssetCounts,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Default, Serialize)]
pub struct AssetCounts {
    pub total: usize,
    pub images: usize,
    pub json: usize,
    pub other: usize,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub outcome: WriteOutcome,
}

impl RunReport {
    pub fn new(mode: &str, project: &Path, assets: &AssetsResult) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            mode: mode.to_string(),
            project: project.display().to_string(),
            assets: AssetCounts {
                total: assets.records.len(),
                images: assets.count(AssetKind::Image),
                json: assets.count(AssetKind::Json),
                other: assets.count(AssetKind::Other),
            },
            files: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: &Path, outcome: WriteOutcome) {
        self.files.push(FileReport {
            path: path.display().to_string(),
            outcome,
        });
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
