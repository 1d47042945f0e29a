//! Filename to Dart identifier conversion.
//!
//! "hello_world.png" → "helloWorld", "reader_json" → "ReaderJson"

use crate::error::{AssetError, Result};

/// Drop everything from the last `.` on ("a.b.png" → "a.b").
fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn split_segments<'a>(input: &'a str, original: &str) -> Result<Vec<&'a str>> {
    let segments: Vec<&str> = input.split('_').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(AssetError::InvalidIdentifier(original.to_string()));
    }
    Ok(segments)
}

/// camelCase identifier for an asset filename.
pub fn format_name(file_name: &str) -> Result<String> {
    let stem = strip_extension(file_name);
    if stem.is_empty() || stem.contains('.') {
        return Err(AssetError::InvalidIdentifier(file_name.to_string()));
    }
    if !stem.contains('_') {
        return Ok(stem.to_string());
    }

    let segments = split_segments(stem, file_name)?;
    let mut name = segments[0].to_lowercase();
    for segment in &segments[1..] {
        name.push_str(&capitalize(segment));
    }
    Ok(name)
}

/// PascalCase type name for an underscore-delimited qualifier.
pub fn format_class_name(qualifier: &str) -> Result<String> {
    if qualifier.is_empty() {
        return Err(AssetError::InvalidIdentifier(qualifier.to_string()));
    }
    let segments = split_segments(qualifier, qualifier)?;
    Ok(segments.iter().map(|s| capitalize(s)).collect())
}

/// Loader method name for a JSON asset: "config.json" → "loadConfig".
pub fn format_loader_name(file_name: &str) -> Result<String> {
    Ok(format!("load{}", capitalize(&format_name(file_name)?)))
}
