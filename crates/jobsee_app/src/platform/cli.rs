use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jobsee_core::{Screen, Tab};
use jobsee_logging::log::LevelFilter;
use jobsee_logging::LogDestination;

/// Browse job listings from the terminal.
#[derive(Debug, Parser)]
#[command(name = "jobsee", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Keep the screen open and read commands from stdin.
    #[arg(short, long, global = true)]
    pub interactive: bool,

    /// Configuration file.
    #[arg(long, global = true, default_value = super::config::CONFIG_FILE)]
    pub config: PathBuf,

    /// Where log output goes.
    #[arg(long, global = true, value_enum, default_value_t = LogTarget::Terminal)]
    pub log: LogTarget,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search listings by keyword.
    Search {
        query: String,
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },
    /// Show one job.
    Details {
        job_id: String,
        /// Tab to open with (about, qualifications, responsibilities).
        #[arg(long, value_parser = parse_tab)]
        tab: Option<Tab>,
    },
}

impl Command {
    pub fn screen(&self) -> Screen {
        match self {
            Command::Search { query, pages } => Screen::Search {
                query: query.clone(),
                num_pages: *pages,
            },
            Command::Details { job_id, .. } => Screen::JobDetails {
                job_id: job_id.clone(),
            },
        }
    }

    pub fn initial_tab(&self) -> Option<Tab> {
        match self {
            Command::Details { tab, .. } => *tab,
            Command::Search { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Off,
    Terminal,
    File,
    Both,
}

impl Cli {
    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::Off => LogDestination::Off,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File,
            LogTarget::Both => LogDestination::Both,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }
}

fn parse_tab(raw: &str) -> Result<Tab, String> {
    raw.parse().map_err(|err: jobsee_core::UnknownTab| err.to_string())
}
