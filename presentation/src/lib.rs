//! Presentation layer for derby-vote
//!
//! This crate contains CLI definitions, widget formatters,
//! submission progress views, and the interactive voting REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod widget;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{JsonFormatter, WidgetFormatter, formatter_for};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use widget::WidgetRepl;
