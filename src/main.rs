//! huescan - command-line tool for hue-based region selection and
//! perimeter extraction.

use std::process::ExitCode;

use huescan::cli;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    cli::run()
}
