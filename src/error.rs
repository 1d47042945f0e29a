use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which file flavor a marker pair belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Manifest,
    Source,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkerKind::Manifest => write!(f, "manifest"),
            MarkerKind::Source => write!(f, "source"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Assets folder not found: {0}")]
    MissingAssetsFolder(PathBuf),
    #[error("Assets folder is empty: {0}")]
    EmptyAssetsFolder(PathBuf),
    #[error("{path} has no {kind} marker pair, expected:\n{start}\n{end}")]
    MissingMarkerPair {
        kind: MarkerKind,
        path: PathBuf,
        start: &'static str,
        end: &'static str,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Cannot derive an identifier from '{0}': empty segment")]
    InvalidIdentifier(String),
    #[error("Invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl AssetError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssetError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssetError::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
