mod args;
mod output;
mod run;

pub use args::{Args, Mode, USAGE};
pub use output::{print_error, print_outcome, print_summary, print_usage};
pub use run::run;
