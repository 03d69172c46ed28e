//! Domain layer for derby-vote
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Vote code
//!
//! A 5-digit credential handed out at the derby. One code buys one vote.
//! The client only checks the format; the server decides whether the code
//! is real and unused.
//!
//! ## Voting widget
//!
//! One button per car, a code input with its validate action, and a status
//! area. The widget is always in one of three postures:
//!
//! - **NotValidated**: no session code, buttons disabled
//! - **Validated**: a well-formed code is held, buttons enabled
//! - **Terminal**: already voted (earlier visit) or vote just recorded

pub mod config;
pub mod core;
pub mod widget;

// Re-export commonly used types
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::{
    error::DomainError,
    item::{Car, ItemId},
    vote_code::{VOTE_CODE_LEN, VoteCode},
};
pub use widget::{
    control::{ControlLabel, Emphasis, TerminalReason, VoteControl, VoteControls},
    receipt::VoteReceipt,
    state::{CodeInput, CodeValidation, VoteSubmission, WidgetPosture, WidgetState},
    status::{StatusLevel, StatusMessage, messages},
};
