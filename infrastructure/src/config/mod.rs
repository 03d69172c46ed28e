//! Configuration file loading for derby-vote
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DERBY_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./derby-vote.toml` or `./.derby-vote.toml`
//! 4. Global: `$XDG_CONFIG_HOME/derby-vote/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_BASE_URL, FileCarConfig, FileConfig, FileOutputConfig, FileOutputFormat,
    FileServerConfig, parse_cars,
};
pub use loader::ConfigLoader;
