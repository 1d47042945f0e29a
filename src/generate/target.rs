//! Dotted target names: `ui.res.app_images.images.dart` → `lib/ui/res/images.dart`
//! holding class `AppImages`.

use std::path::{Path, PathBuf};

use crate::error::{AssetError, Result};
use crate::naming::format_class_name;

pub const DART_EXTENSION: &str = ".dart";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DartTarget {
    /// Directories below the source root
    pub directories: Vec<String>,
    pub class_name: String,
    /// File name including the `.dart` extension
    pub file_name: String,
}

impl DartTarget {
    pub fn parse(arg: &str) -> Result<Self> {
        let stem = arg.strip_suffix(DART_EXTENSION).ok_or_else(|| {
            AssetError::InvalidArguments(format!(
                "target '{}' must end with {}",
                arg, DART_EXTENSION
            ))
        })?;

        let segments: Vec<&str> = stem.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(AssetError::InvalidArguments(format!(
                "target '{}' contains an empty segment",
                arg
            )));
        }

        let (file, class, directories) = match segments.as_slice() {
            [file] => (*file, *file, &[][..]),
            [dirs @ .., class, file] => (*file, *class, dirs),
            [] => return Err(AssetError::InvalidArguments("empty target".to_string())),
        };

        let class_name = format_class_name(class)
            .map_err(|_| AssetError::InvalidArguments(format!("bad class name '{}'", class)))?;

        Ok(Self {
            directories: directories.iter().map(|d| d.to_string()).collect(),
            class_name,
            file_name: format!("{}{}", file, DART_EXTENSION),
        })
    }

    /// `<project>/<source_root>/<dirs...>/<file>.dart`
    pub fn path(&self, project_root: &Path, source_root: &Path) -> PathBuf {
        let mut path = project_root.join(source_root);
        for dir in &self.directories {
            path.push(dir);
        }
        path.push(&self.file_name);
        path
    }
}
