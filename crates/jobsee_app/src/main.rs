mod platform;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    platform::run(platform::cli::Cli::parse())
}
