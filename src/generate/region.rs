//! Marker-delimited regions that this tool owns inside otherwise hand-written files.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::MarkerKind;

pub const MANIFEST_START: &str = "# === Generated Code Start ===";
pub const MANIFEST_END: &str = "# === Generated Code End ===";
pub const SOURCE_START: &str = "// === Generated Code Start ===";
pub const SOURCE_END: &str = "// === Generated Code End ===";

/// Indentation placed in front of the end marker
pub const END_INDENT: &str = "  ";

static MANIFEST_PATTERN: Lazy<Regex> = Lazy::new(|| marker_pattern(MANIFEST_START, MANIFEST_END));
static SOURCE_PATTERN: Lazy<Regex> = Lazy::new(|| marker_pattern(SOURCE_START, SOURCE_END));

fn marker_pattern(start: &str, end: &str) -> Regex {
    Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(start),
        regex::escape(end)
    ))
    .unwrap()
}

#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub kind: MarkerKind,
    pub start: &'static str,
    pub end: &'static str,
    pattern: &'static Lazy<Regex>,
}

pub static MANIFEST_REGION: Region = Region {
    kind: MarkerKind::Manifest,
    start: MANIFEST_START,
    end: MANIFEST_END,
    pattern: &MANIFEST_PATTERN,
};

pub static SOURCE_REGION: Region = Region {
    kind: MarkerKind::Source,
    start: SOURCE_START,
    end: SOURCE_END,
    pattern: &SOURCE_PATTERN,
};

impl Region {
    /// Byte span of the first start..end marker pair, markers included.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.pattern.find(text).map(|m| m.range())
    }

    /// Full replacement text for the span: both markers around `body`.
    pub fn render(&self, body: &str) -> String {
        format!("{}\n{}{}{}", self.start, body, END_INDENT, self.end)
    }

    /// Replace the first region in `text`, or `None` when the markers are missing.
    ///
    /// Text outside the span is copied unchanged and `body` is inserted literally.
    pub fn patch(&self, text: &str, body: &str) -> Option<String> {
        let span = self.find(text)?;
        let mut out = String::with_capacity(text.len() + body.len());
        out.push_str(&text[..span.start]);
        out.push_str(&self.render(body));
        out.push_str(&text[span.end..]);
        Some(out)
    }
}
