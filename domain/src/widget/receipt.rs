//! Vote receipt value object

use crate::core::item::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proof that the server accepted a vote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub item_id: ItemId,
    /// Message returned by the server, if it sent one
    pub message: Option<String>,
    /// Local time the acceptance was received
    pub recorded_at: DateTime<Utc>,
}

impl VoteReceipt {
    pub fn new(item_id: ItemId, message: Option<String>) -> Self {
        Self {
            item_id,
            message,
            recorded_at: Utc::now(),
        }
    }
}
