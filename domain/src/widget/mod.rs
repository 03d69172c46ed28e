//! Voting widget model
//!
//! Everything the voting widget shows, as plain data:
//!
//! - [`state::WidgetState`]: code input, validate action, controls, status area
//! - [`control::VoteControls`]: one button per car, mutated in lock-step
//! - [`status::StatusMessage`]: info / success / danger messages
//! - [`receipt::VoteReceipt`]: what the server handed back for an accepted vote

pub mod control;
pub mod receipt;
pub mod state;
pub mod status;
