//! HTTP adapter for the voting server
//!
//! | Endpoint | Request | Accepted | Rejected |
//! |----------|---------|----------|----------|
//! | `GET /check-vote` | none | `{"has_voted": bool}` | non-2xx |
//! | `POST /vote/{id}` | form `vote_code` | 2xx + any JSON | non-2xx, optional `{"error": ...}` |

pub mod client;
pub mod error;

pub use client::{DEFAULT_USER_AGENT, HttpVoteApi, parse_base_url};
pub use error::HttpError;
