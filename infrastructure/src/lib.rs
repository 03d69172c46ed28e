//! Infrastructure layer for derby-vote
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, DEFAULT_BASE_URL, FileCarConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileServerConfig,
};
pub use http::{DEFAULT_USER_AGENT, HttpError, HttpVoteApi, parse_base_url};
