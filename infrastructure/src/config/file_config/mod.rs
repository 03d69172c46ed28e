//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod cars;
mod output;
mod server;

pub use cars::{FileCarConfig, parse_cars};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use server::{DEFAULT_BASE_URL, FileServerConfig};

use derby_domain::{Car, ConfigIssue};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Voting server settings
    pub server: FileServerConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Cars shown in the widget, in display order
    pub cars: Vec<FileCarConfig>,
}

impl FileConfig {
    /// The configured cars, with invalid or duplicate entries dropped
    pub fn cars(&self) -> Vec<Car> {
        parse_cars(&self.cars).0
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.server.validate();
        issues.extend(parse_cars(&self.cars).1);
        issues
    }
}
