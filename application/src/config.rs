//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases and
//! their adapters behave, such as request timeouts.

use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of the voting server adapter. By default no
/// timeout is applied: a slow request keeps its vote control disabled until
/// it resolves.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a server response before giving up.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None` (or zero), no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        assert!(BehaviorConfig::default().timeout.is_none());
    }

    #[test]
    fn test_zero_seconds_means_no_timeout() {
        assert!(BehaviorConfig::from_timeout_seconds(Some(0)).timeout.is_none());
        assert_eq!(
            BehaviorConfig::from_timeout_seconds(Some(5)).timeout,
            Some(Duration::from_secs(5))
        );
    }
}
