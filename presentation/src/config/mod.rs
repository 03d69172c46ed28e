//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use crate::cli::commands::Cli;
use derby_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// How the widget is printed
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    pub fn new(format: Option<OutputFormat>, color: bool) -> Self {
        Self {
            format: format.unwrap_or_default(),
            color,
        }
    }

    /// Apply `--output` and `--no-color` on top of file settings
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(format) = cli.output {
            self.format = format.into();
        }
        if cli.no_color {
            self.color = false;
        }
        self
    }

    /// Turn terminal colors off process-wide when disabled
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            history_file: dirs::data_dir().map(|p| p.join("derby-vote").join("history.txt")),
        }
    }
}
