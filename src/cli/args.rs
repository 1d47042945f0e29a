use clap::Parser;
use std::path::PathBuf;

use crate::error::{AssetError, Result};
use crate::generate::{DartTarget, GeneratorKind, DART_EXTENSION};

pub const USAGE: &str = "\
Usage:
  pubspec-assets                              update the asset list in pubspec.yaml
  pubspec-assets AssetImage <dotted.path>.dart  generate image constants
  pubspec-assets JSON <dotted.path>.dart        generate JSON loaders

The dotted path is <dir>.<dir>.<ClassName>.<file_name>.dart, resolved below lib/.
pubspec.yaml must contain the lines:
  # === Generated Code Start ===
  # === Generated Code End ===";

#[derive(Parser, Debug)]
#[command(name = "pubspec-assets")]
#[command(version, about = "Register Flutter assets in pubspec.yaml and generate Dart accessors")]
#[command(after_help = USAGE)]
pub struct Args {
    /// Generator (AssetImage or JSON) and dotted target file; none to update pubspec.yaml
    #[arg(value_name = "ARGS")]
    pub positional: Vec<String>,

    /// Flutter project root
    #[arg(short = 'C', long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Config file (defaults to pubspec_assets.toml in the project root)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON report to stdout
    #[arg(long)]
    pub json: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a run does, decided by the positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    UpdateManifest,
    Generate {
        kind: GeneratorKind,
        target: DartTarget,
    },
}

impl Mode {
    pub fn from_positional(positional: &[String]) -> Result<Self> {
        match positional {
            [] => Ok(Mode::UpdateManifest),
            [single] => Err(AssetError::InvalidArguments(format!(
                "'{}' needs a target file, e.g. `{} res.AppImages.images{}`",
                single, single, DART_EXTENSION
            ))),
            [kind, target] => {
                let kind: GeneratorKind = kind.parse()?;
                let target = DartTarget::parse(target)?;
                Ok(Mode::Generate { kind, target })
            }
            more => Err(AssetError::InvalidArguments(format!(
                "too many arguments ({}), expected at most 2",
                more.len()
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::UpdateManifest => "manifest",
            Mode::Generate {
                kind: GeneratorKind::AssetImage,
                ..
            } => "image",
            Mode::Generate {
                kind: GeneratorKind::Json,
                ..
            } => "json",
        }
    }
}
