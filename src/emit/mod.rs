mod json;
mod write;

pub use json::{AssetCounts, FileReport, RunReport};
pub use write::{read_text, write_atomic, write_if_changed, WriteOutcome};
