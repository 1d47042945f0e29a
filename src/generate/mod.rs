pub mod dart;
mod manifest;
pub mod region;
mod target;

pub use dart::{generate_source, render_source_file, GeneratorKind};
pub use manifest::{patch_manifest, update_manifest};
pub use region::{Region, MANIFEST_REGION, SOURCE_REGION};
pub use target::{DartTarget, DART_EXTENSION};
