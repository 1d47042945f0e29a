mod filter;
mod walker;

pub use filter::{should_include_file, DEFAULT_IGNORED_FILES};
pub use walker::scan_directory;
