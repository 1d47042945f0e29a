//! Dart accessor classes for image constants and JSON loaders.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use super::region::SOURCE_REGION;
use super::target::DartTarget;
use crate::analyze::AssetsResult;
use crate::emit::{read_text, write_atomic, write_if_changed, WriteOutcome};
use crate::error::{AssetError, Result};

const JSON_PREAMBLE: &str = "import 'package:flutter/services.dart' show rootBundle;\n\n";

/// Which accessor class to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// `static const String` per image
    AssetImage,
    /// `Future<String> loadX()` per JSON file
    Json,
}

impl GeneratorKind {
    pub fn as_arg(&self) -> &'static str {
        match self {
            GeneratorKind::AssetImage => "AssetImage",
            GeneratorKind::Json => "JSON",
        }
    }

    pub fn lines<'a>(&self, assets: &'a AssetsResult) -> &'a [String] {
        match self {
            GeneratorKind::AssetImage => &assets.image_lines,
            GeneratorKind::Json => &assets.json_lines,
        }
    }

    fn preamble(&self) -> &'static str {
        match self {
            GeneratorKind::AssetImage => "",
            GeneratorKind::Json => JSON_PREAMBLE,
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_arg())
    }
}

impl FromStr for GeneratorKind {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "AssetImage" => Ok(GeneratorKind::AssetImage),
            "JSON" => Ok(GeneratorKind::Json),
            other => Err(AssetError::InvalidArguments(format!(
                "unknown generator '{}', expected AssetImage or JSON",
                other
            ))),
        }
    }
}

/// Text of a brand-new accessor file.
pub fn render_source_file(kind: GeneratorKind, class_name: &str, lines: &[String]) -> String {
    let body: String = lines.concat();
    format!(
        "{preamble}class {class} {{\n  {class}._();\n\n  {region}\n}}\n",
        preamble = kind.preamble(),
        class = class_name,
        region = SOURCE_REGION.render(&body),
    )
}

/// Create the target file, or patch its generated region when it already exists.
pub fn generate_source(
    kind: GeneratorKind,
    target: &DartTarget,
    path: &Path,
    assets: &AssetsResult,
) -> Result<WriteOutcome> {
    let lines = kind.lines(assets);

    let outcome = if path.exists() {
        let content = read_text(path)?;
        let patched = SOURCE_REGION
            .patch(&content, &lines.concat())
            .ok_or_else(|| AssetError::MissingMarkerPair {
                kind: SOURCE_REGION.kind,
                path: path.to_path_buf(),
                start: SOURCE_REGION.start,
                end: SOURCE_REGION.end,
            })?;
        write_if_changed(path, &content, &patched)?
    } else {
        write_atomic(path, &render_source_file(kind, &target.class_name, lines))?;
        WriteOutcome::Created
    };

    info!(
        path = %path.display(),
        generator = kind.as_arg(),
        items = lines.len(),
        outcome = outcome.as_str(),
        "source generated"
    );
    Ok(outcome)
}
