//! Voting widget use case
//!
//! Drives one widget instance against the voting server: the load-time
//! prior-vote check, the validate action, and vote submission.
//!
//! The widget state sits behind a mutex that is only held for the duration
//! of a state transition, never across a server call. Other handlers keep
//! working while a vote is in flight; the in-flight marker in
//! [`WidgetState`] keeps it to one submission per widget.

use crate::ports::vote_api::{ApiError, VoteApi};
use crate::ports::widget_view::{NoWidgetView, WidgetView};
use derby_domain::{
    CodeValidation, DomainError, ItemId, VoteReceipt, WidgetPosture, WidgetState,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// How a vote request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The server accepted the vote
    Recorded(VoteReceipt),
    /// Rejected by the server or lost on the way; the code has to be
    /// entered and validated again
    Failed(ApiError),
    /// Refused locally, nothing was sent
    Refused(DomainError),
}

impl VoteOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, VoteOutcome::Recorded(_))
    }

    /// Whether a request went out to the server
    pub fn was_submitted(&self) -> bool {
        !matches!(self, VoteOutcome::Refused(_))
    }
}

/// One voting widget, as shown on one page load
pub struct VotingWidget {
    api: Arc<dyn VoteApi>,
    view: Arc<dyn WidgetView>,
    state: Mutex<WidgetState>,
}

impl VotingWidget {
    /// Create a widget with one vote control per item
    pub fn new(
        api: Arc<dyn VoteApi>,
        items: impl IntoIterator<Item = ItemId>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            api,
            view: Arc::new(NoWidgetView),
            state: Mutex::new(WidgetState::with_items(items)?),
        })
    }

    /// Create with a view that is notified of every change.
    pub fn with_view(mut self, view: Arc<dyn WidgetView>) -> Self {
        self.view = view;
        self
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> WidgetState {
        self.lock().clone()
    }

    pub fn posture(&self) -> WidgetPosture {
        self.lock().posture()
    }

    /// Page-load initialization: ask the server whether this session has
    /// already voted.
    ///
    /// A failing check is logged and otherwise ignored; the widget then
    /// behaves as if no vote was cast. Returns `None` in that case.
    pub async fn initialize(&self) -> Option<bool> {
        match self.check_vote_status().await {
            Ok(has_voted) => Some(has_voted),
            Err(e) => {
                warn!("Vote status check failed, assuming no prior vote: {}", e);
                None
            }
        }
    }

    /// Query the prior-vote status and lock the widget if a vote exists
    pub async fn check_vote_status(&self) -> Result<bool, ApiError> {
        let status = self.api.check_vote().await?;
        debug!("check-vote reported has_voted={}", status.has_voted);

        if self.update(|state| state.apply_vote_check(status.has_voted)) {
            info!("Session has already voted, vote controls locked");
        }
        Ok(status.has_voted)
    }

    /// Type into the code input
    pub fn enter_code(&self, text: &str) -> bool {
        self.update(|state| state.enter_code(text))
    }

    /// Validate the code input's current value. Purely local, the server
    /// only sees the code at vote time.
    pub fn validate_code(&self) -> CodeValidation {
        let result = self.update(WidgetState::validate_code);
        match &result {
            CodeValidation::Accepted(_) => info!("Vote code accepted, voting enabled"),
            CodeValidation::Rejected => debug!("Vote code rejected: not 5 digits"),
            CodeValidation::Ignored => debug!("Validate ignored, widget is closed"),
        }
        result
    }

    /// Enter `text` and validate it in one go
    pub fn submit_code(&self, text: &str) -> CodeValidation {
        self.enter_code(text);
        self.validate_code()
    }

    /// Vote for `item_id` with the session vote code.
    ///
    /// Any server or transport failure is handled the same way: the clicked
    /// control comes back, the code is dropped, and the input is cleared.
    pub async fn vote(&self, item_id: &ItemId) -> VoteOutcome {
        let submission = match self.update(|state| state.begin_vote(item_id)) {
            Ok(submission) => submission,
            Err(e) => {
                if e.is_input_error() {
                    debug!("Vote for car {} refused: {}", item_id, e);
                } else {
                    debug!("Vote for car {} ignored: {}", item_id, e);
                }
                return VoteOutcome::Refused(e);
            }
        };

        info!("Submitting vote for car {}", item_id);
        self.view.on_submission_start(item_id);
        let mut guard = SubmissionGuard {
            widget: self,
            item_id,
            armed: true,
        };

        let result = self.api.submit_vote(&submission).await;
        guard.armed = false;

        match result {
            Ok(accepted) => {
                self.view.on_submission_end(item_id, true);
                self.update(|state| state.finish_vote_recorded(item_id));
                info!("Vote for car {} recorded", item_id);
                VoteOutcome::Recorded(VoteReceipt::new(item_id.clone(), accepted.message))
            }
            Err(e) => {
                if e.is_rejection() {
                    warn!("Vote for car {} rejected by the server: {}", item_id, e);
                } else {
                    warn!("Vote for car {} did not reach the server: {}", item_id, e);
                }
                self.view.on_submission_end(item_id, false);
                self.update(|state| state.finish_vote_failed(item_id));
                VoteOutcome::Failed(e)
            }
        }
    }

    /// Apply a transition and tell the view about it.
    ///
    /// The view is called after the lock is released.
    fn update<T>(&self, transition: impl FnOnce(&mut WidgetState) -> T) -> T {
        let (result, status, snapshot) = {
            let mut state = self.lock();
            let revision = state.status_revision();
            let result = transition(&mut state);
            let status = if state.status_revision() != revision {
                state.status().cloned()
            } else {
                None
            };
            (result, status, state.clone())
        };

        if let Some(status) = &status {
            self.view.on_status(status);
        }
        self.view.on_state_changed(&snapshot);
        result
    }

    fn lock(&self) -> MutexGuard<'_, WidgetState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases the in-flight marker when a `vote` future is dropped before
/// the server answered. Disarmed once the answer is in.
struct SubmissionGuard<'a> {
    widget: &'a VotingWidget,
    item_id: &'a ItemId,
    armed: bool,
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("Vote for car {} cancelled before the server answered", self.item_id);
        self.widget.view.on_submission_end(self.item_id, false);
        self.widget.update(|state| state.finish_vote_failed(self.item_id));
    }
}
