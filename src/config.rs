use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::api::DEFAULT_BASE_URL;

/// Browse upcoming meetups from the terminal.
#[derive(Parser, Debug)]
#[command(name = "mcli", version, about)]
pub struct Cli {
    /// Base URL of the events backend
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Write debug logs to the log file
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub debug: bool,

    /// Where debug logs go
    #[arg(long, default_value = "debug.log")]
    pub log_file: PathBuf,
}

/// Resolved runtime configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
    pub timeout: Duration,
    pub debug: bool,
    pub log_file: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            api_base_url: cli.api_base_url,
            timeout: Duration::from_secs(cli.timeout.max(1)),
            debug: cli.debug,
            log_file: cli.log_file,
        }
    }
}
