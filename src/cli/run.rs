use anyhow::{Context, Result};
use std::fs;

use tracing::info;

use super::args::{Args, Mode};
use super::output::{print_outcome, print_summary};
use crate::analyze::classify_assets;
use crate::config::Config;
use crate::emit::RunReport;
use crate::error::AssetError;
use crate::generate::{generate_source, update_manifest};
use crate::scan::scan_directory;
use crate::types::AssetKind;

/// Execute one invocation: scan, classify, then patch the manifest or a Dart file.
pub fn run(args: &Args) -> Result<RunReport> {
    let mode = Mode::from_positional(&args.positional)?;

    let root = fs::canonicalize(&args.project_dir)
        .map_err(|e| AssetError::read(&args.project_dir, e))
        .context("Project directory is not accessible")?;
    let config = Config::load(&root, args.config.as_deref())?;

    let assets_dir = root.join(&config.assets_dir);
    let files = scan_directory(&assets_dir, &config.ignore)?;
    if files.is_empty() {
        return Err(AssetError::EmptyAssetsFolder(assets_dir).into());
    }
    info!(mode = mode.name(), files = files.len(), "assets discovered");

    let assets = classify_assets(files, &root)?;
    let mut report = RunReport::new(mode.name(), &root, &assets);

    match &mode {
        Mode::UpdateManifest => {
            let manifest = root.join(&config.manifest);
            let outcome = update_manifest(&manifest, &assets.manifest_block)?;
            print_outcome(&manifest, outcome);
            report.add_file(&manifest, outcome);
        }
        Mode::Generate { kind, target } => {
            let path = target.path(&root, &config.source_root);
            let outcome = generate_source(*kind, target, &path, &assets)?;
            print_outcome(&path, outcome);
            report.add_file(&path, outcome);
        }
    }

    print_summary(
        assets.records.len(),
        assets.count(AssetKind::Image),
        assets.count(AssetKind::Json),
    );
    Ok(report)
}
