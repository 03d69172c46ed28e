//! Application layer for derby-vote
//!
//! This crate contains the voting widget use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    vote_api::{ApiError, VoteAccepted, VoteApi, VoteStatus},
    widget_view::{NoWidgetView, WidgetView},
};
pub use use_cases::voting_widget::{VoteOutcome, VotingWidget};
