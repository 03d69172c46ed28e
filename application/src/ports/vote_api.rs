//! Vote API port
//!
//! Defines the interface for talking to the voting server:
//!
//! - `GET /check-vote` → `{"has_voted": bool}`
//! - `POST /vote/{id}` with form field `vote_code` → 2xx + JSON on acceptance

use async_trait::async_trait;
use derby_domain::VoteSubmission;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the voting server
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Server rejected the request with HTTP {status}{}", detail_suffix(.message))]
    Rejected {
        status: u16,
        /// `error` field of the response body, when the server sent one
        message: Option<String>,
    },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// The server answered and said no (as opposed to never answering properly)
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

/// Body of `GET /check-vote`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteStatus {
    pub has_voted: bool,
}

/// What the server sent back for an accepted vote
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteAccepted {
    /// `message` field of the response body, if any
    pub message: Option<String>,
}

/// Gateway to the voting server
///
/// This port defines how the widget reaches its HTTP collaborator.
/// Implementations (adapters) live in the infrastructure layer. Session
/// identity (cookies or otherwise) is the adapter's business.
#[async_trait]
pub trait VoteApi: Send + Sync {
    /// Ask whether the current session has already voted
    async fn check_vote(&self) -> Result<VoteStatus, ApiError>;

    /// Submit one vote. Any `Err` means the vote was not recorded.
    async fn submit_vote(&self, submission: &VoteSubmission) -> Result<VoteAccepted, ApiError>;
}
