pub mod app;
pub mod cli;
pub mod config;
pub mod effects;
pub mod input;
pub mod ui;

use std::process::ExitCode;

use jobsee_core::FetchStatus;
use jobsee_logging::jobsee_error;

use app::{run_app, RunOptions};
use cli::Cli;

pub fn run(cli: Cli) -> ExitCode {
    jobsee_logging::initialize(cli.log_destination(), cli.log_level());

    let config = config::load_config(&cli.config);
    let options = RunOptions {
        screen: cli.command.screen(),
        initial_tab: cli.command.initial_tab(),
        interactive: cli.interactive,
    };

    match run_app(options, &config) {
        Ok(FetchStatus::Error) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            jobsee_error!("{}", err);
            eprintln!("jobsee: {err}");
            ExitCode::FAILURE
        }
    }
}
