use clap::Parser;
use std::process::ExitCode;

use pubspec_assets::cli::{print_error, print_usage, run, Args};
use pubspec_assets::logging::init_logging;
use pubspec_assets::AssetError;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(report) => {
            if args.json {
                println!("{}", report.to_json());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            print_error(&format!("{:#}", err));
            if matches!(
                err.downcast_ref::<AssetError>(),
                Some(AssetError::InvalidArguments(_))
            ) {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
