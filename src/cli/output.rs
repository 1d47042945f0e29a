use console::style;
use std::path::Path;

use super::args::USAGE;
use crate::emit::WriteOutcome;

pub fn print_outcome(path: &Path, outcome: WriteOutcome) {
    let label = match outcome {
        WriteOutcome::Created => style("created").green(),
        WriteOutcome::Patched => style("updated").cyan(),
        WriteOutcome::Unchanged => style("unchanged").dim(),
    };
    eprintln!("  {} {} {}", style("✓").green(), label, path.display());
}

pub fn print_summary(total: usize, images: usize, json: usize) {
    eprintln!(
        "  {} {} assets ({} images, {} json)",
        style("•").dim(),
        style(total).bold(),
        images,
        json
    );
}

pub fn print_error(message: &str) {
    eprintln!("  {} {}", style("✗").red(), style(message).red());
}

pub fn print_usage() {
    eprintln!();
    eprintln!("{}", USAGE);
}
