//! CLI argument parsing for pc

use clap::Parser;

/// pc - chat with Pulumi Copilot from the terminal
#[derive(Parser, Debug)]
#[command(name = "pc")]
#[command(
    version,
    about = "Interactive terminal client for Pulumi Copilot",
    long_about = None,
    after_help = "Requires PULUMI_COPILOT_URL and PULUMI_ACCESS_TOKEN to be set."
)]
pub struct Cli {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}
