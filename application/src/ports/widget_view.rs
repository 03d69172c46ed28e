//! Widget view port
//!
//! Defines the interface for showing widget changes to the user.

use derby_domain::{ItemId, StatusMessage, WidgetState};

/// Callback for UI updates from the voting widget
///
/// Implementations live in the presentation layer and can display
/// the widget in various ways (console, JSON log, etc.)
pub trait WidgetView: Send + Sync {
    /// Called whenever a handler writes to the status area
    fn on_status(&self, status: &StatusMessage);

    /// Called after every handler with the resulting state
    fn on_state_changed(&self, _state: &WidgetState) {}

    // ==================== Submission Callbacks ====================

    /// Called right before a vote is sent to the server
    fn on_submission_start(&self, _item_id: &ItemId) {}

    /// Called when the server's answer (or the failure) is in
    fn on_submission_end(&self, _item_id: &ItemId, _recorded: bool) {}
}

/// No-op view for when nothing needs to be displayed
pub struct NoWidgetView;

impl WidgetView for NoWidgetView {
    fn on_status(&self, _status: &StatusMessage) {}
}
