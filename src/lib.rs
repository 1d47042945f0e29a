//! Register Flutter assets in `pubspec.yaml` and generate typed Dart accessors.

pub mod analyze;
pub mod cli;
pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod logging;
pub mod naming;
pub mod scan;
pub mod types;

pub use error::{AssetError, Result};
