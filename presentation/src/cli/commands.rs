//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored console rendering
    Text,
    /// Widget state as JSON
    Json,
}

impl From<OutputFormat> for derby_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => derby_domain::OutputFormat::Text,
            OutputFormat::Json => derby_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for derby-vote
#[derive(Parser, Debug)]
#[command(name = "derby-vote")]
#[command(author, version, about = "Derby voting client - validate a vote code and vote for a car")]
#[command(long_about = r#"
derby-vote talks to a derby voting server on behalf of one visitor.

Voting takes two steps:
1. Enter and validate your 5-digit vote code
2. Vote for one car; a recorded vote locks the widget

Without --code the client starts an interactive session.

Configuration files are loaded from (in priority order):
1. DERBY_* environment variables (DERBY_SERVER__BASE_URL, ...)
2. --config <path>     Explicit config file
3. ./derby-vote.toml   Project-level config
4. ~/.config/derby-vote/config.toml   Global config

Example:
  derby-vote --server http://derby.local:5001 --car 1 --car 2 --car 3
  derby-vote --car 1 --car 2 --code 12345 --vote 2
  derby-vote --car 2 --code 12345 --vote 2 --output json
"#)]
pub struct Cli {
    /// Base URL of the voting server
    #[arg(short, long, value_name = "URL")]
    pub server: Option<String>,

    /// Car ids to show (can be specified multiple times, replaces configured cars)
    #[arg(long = "car", value_name = "ID")]
    pub cars: Vec<String>,

    /// Vote code to validate (runs one-shot instead of interactive)
    #[arg(long, value_name = "DIGITS")]
    pub code: Option<String>,

    /// Car to vote for once the code is validated
    #[arg(long, value_name = "ID", requires = "code")]
    pub vote: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Request timeout in seconds (0 disables the timeout)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Whether this run validates (and maybe votes) once instead of
    /// starting the interactive session
    pub fn is_one_shot(&self) -> bool {
        self.code.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_interactive() {
        let cli = Cli::try_parse_from(["derby-vote"]).unwrap();
        assert!(!cli.is_one_shot());
        assert!(cli.cars.is_empty());
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_one_shot_vote() {
        let cli = Cli::try_parse_from([
            "derby-vote",
            "--server",
            "http://derby.local:5001",
            "--car",
            "1",
            "--car",
            "2",
            "--code",
            "00042",
            "--vote",
            "2",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert!(cli.is_one_shot());
        assert_eq!(cli.server.as_deref(), Some("http://derby.local:5001"));
        assert_eq!(cli.cars, vec!["1", "2"]);
        assert_eq!(cli.code.as_deref(), Some("00042"));
        assert_eq!(cli.vote.as_deref(), Some("2"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_vote_requires_code() {
        assert!(Cli::try_parse_from(["derby-vote", "--vote", "2"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            derby_domain::OutputFormat::from(OutputFormat::Json),
            derby_domain::OutputFormat::Json
        );
        assert_eq!(
            derby_domain::OutputFormat::from(OutputFormat::Text),
            derby_domain::OutputFormat::Text
        );
    }
}
