//! Server configuration from TOML (`[server]` section)

use crate::http::{DEFAULT_USER_AGENT, parse_base_url};
use derby_application::BehaviorConfig;
use derby_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Where the voting server listens when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5001";

/// Raw server configuration from TOML
///
/// # Example
///
/// ```toml
/// [server]
/// base_url = "https://derby.example.org"
/// timeout_seconds = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Base URL the `/check-vote` and `/vote/{id}` paths are joined onto
    pub base_url: String,
    /// Request timeout; unset or 0 waits forever
    pub timeout_seconds: Option<u64>,
    /// User-Agent header override
    pub user_agent: Option<String>,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl FileServerConfig {
    pub fn behavior(&self) -> BehaviorConfig {
        BehaviorConfig::from_timeout_seconds(self.timeout_seconds)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        match parse_base_url(&self.base_url) {
            Ok(_) => Vec::new(),
            Err(e) => vec![ConfigIssue::error(
                ConfigIssueCode::InvalidServerUrl {
                    value: self.base_url.clone(),
                },
                format!("server.base_url: {}", e),
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = FileServerConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5001");
        assert!(config.behavior().timeout.is_none());
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_timeout_and_user_agent() {
        let config = FileServerConfig {
            timeout_seconds: Some(3),
            user_agent: Some("kiosk-1".to_string()),
            ..Default::default()
        };
        assert_eq!(config.behavior().timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.user_agent(), "kiosk-1");
    }

    #[test]
    fn test_invalid_url_is_an_error() {
        let config = FileServerConfig {
            base_url: "derby.local".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
