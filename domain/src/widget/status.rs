//! Status display messages

use serde::{Deserialize, Serialize};

/// Severity of a status message, mirrors the alert styles of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Info,
    Success,
    Danger,
}

impl StatusLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLevel::Info => "info",
            StatusLevel::Success => "success",
            StatusLevel::Danger => "danger",
        }
    }
}

impl std::fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Texts shown in the status area
pub mod messages {
    pub const INVALID_CODE: &str = "Please enter a valid 5-digit code";
    pub const CODE_VALIDATED: &str = "Code validated! You can now vote for a car";
    pub const MISSING_CODE: &str = "Please enter and validate your voting code first";
    pub const VOTE_RECORDED: &str = "Thank you for voting!";
    pub const VOTE_FAILED: &str = "Invalid or already used voting code";
    pub const SUBMISSION_PENDING: &str = "Please wait, your vote is being submitted";

    pub fn unknown_car(id: &str) -> String {
        format!("Unknown car: {}", id)
    }
}

/// A message in the status area (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Success, text)
    }

    pub fn danger(text: impl Into<String>) -> Self {
        Self::new(StatusLevel::Danger, text)
    }

    pub fn is_danger(&self) -> bool {
        self.level == StatusLevel::Danger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&StatusLevel::Danger).unwrap();
        assert_eq!(json, "\"danger\"");
    }

    #[test]
    fn test_constructors() {
        assert_eq!(StatusMessage::info("x").level, StatusLevel::Info);
        assert_eq!(StatusMessage::success("x").level, StatusLevel::Success);
        assert!(StatusMessage::danger("x").is_danger());
    }
}
