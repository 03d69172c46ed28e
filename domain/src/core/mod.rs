//! Core domain concepts shared across all subdomains.
//!
//! - [`vote_code::VoteCode`]: a validated 5-digit voting code
//! - [`item::ItemId`] / [`item::Car`]: the items a vote can be cast for
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod item;
pub mod vote_code;
