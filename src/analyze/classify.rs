//! Asset classification and code fragment generation.
//!
//! Every discovered file contributes a manifest line; images and JSON files
//! additionally contribute one Dart declaration each.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Result;
use crate::naming::{format_loader_name, format_name};
use crate::types::{AssetKind, AssetRecord};

/// First line of the block written between the manifest markers
pub const MANIFEST_HEADER: &str = "  assets:\n";

/// Everything derived from one scan of the assets folder
#[derive(Debug, Clone, Default)]
pub struct AssetsResult {
    pub records: Vec<AssetRecord>,
    /// Header plus one `    - path` line per asset
    pub manifest_block: String,
    pub image_lines: Vec<String>,
    pub json_lines: Vec<String>,
}

impl AssetsResult {
    pub fn count(&self, kind: AssetKind) -> usize {
        self.records.iter().filter(|r| r.kind == kind).count()
    }
}

pub fn manifest_line(relative_path: &str) -> String {
    format!("    - {}\n", relative_path)
}

pub fn image_declaration(identifier: &str, relative_path: &str) -> String {
    format!(
        "  static const String {} = '{}';\n",
        identifier,
        escape_dart(relative_path)
    )
}

pub fn json_declaration(method: &str, relative_path: &str) -> String {
    format!(
        "  static Future<String> {}() => rootBundle.loadString('{}');\n",
        method,
        escape_dart(relative_path)
    )
}

/// Escape a path for use inside a single-quoted Dart string.
fn escape_dart(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('$', "\\$")
}

/// Classify scanned files relative to `project_root` and build the outputs.
pub fn classify_assets(files: Vec<PathBuf>, project_root: &Path) -> Result<AssetsResult> {
    let mut result = AssetsResult {
        manifest_block: MANIFEST_HEADER.to_string(),
        ..Default::default()
    };
    let mut seen: HashMap<(AssetKind, String), String> = HashMap::new();

    for path in files {
        let record = AssetRecord::new(path, project_root);
        result.manifest_block.push_str(&manifest_line(&record.relative_path));

        match record.kind {
            AssetKind::Image => {
                let identifier = format_name(&record.file_name)?;
                note_duplicate(&mut seen, record.kind, &identifier, &record.relative_path);
                result
                    .image_lines
                    .push(image_declaration(&identifier, &record.relative_path));
            }
            AssetKind::Json => {
                let method = format_loader_name(&record.file_name)?;
                note_duplicate(&mut seen, record.kind, &method, &record.relative_path);
                result
                    .json_lines
                    .push(json_declaration(&method, &record.relative_path));
            }
            AssetKind::Other => {}
        }
        result.records.push(record);
    }

    Ok(result)
}

fn note_duplicate(
    seen: &mut HashMap<(AssetKind, String), String>,
    kind: AssetKind,
    name: &str,
    path: &str,
) {
    if let Some(previous) = seen.insert((kind, name.to_string()), path.to_string()) {
        warn!(
            identifier = name,
            first = %previous,
            second = %path,
            "two {} assets map to the same identifier",
            kind.as_str()
        );
    }
}
