//! Widget state and its transitions
//!
//! [`WidgetState`] is the whole UI of the voting widget as plain data: the
//! code input, the validate action, the vote controls, the status area, and
//! the session vote code. Every handler of the widget is a transition on
//! this type; network I/O happens outside, between [`WidgetState::begin_vote`]
//! and one of the `finish_vote_*` transitions.
//!
//! ```text
//!   NotValidated ──validate ok──▶ Validated ──vote accepted──▶ Terminal(VoteRecorded)
//!        ▲                            │
//!        └──────── vote failed ───────┘
//!
//!   any ──check reports has_voted──▶ Terminal(AlreadyVoted)
//! ```

use super::control::{TerminalReason, VoteControl, VoteControls};
use super::status::{StatusMessage, messages};
use crate::core::error::DomainError;
use crate::core::item::ItemId;
use crate::core::vote_code::VoteCode;
use serde::{Deserialize, Serialize};

/// The text field holding the vote code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInput {
    value: String,
    enabled: bool,
}

impl CodeInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for CodeInput {
    fn default() -> Self {
        Self {
            value: String::new(),
            enabled: true,
        }
    }
}

/// The three mutually exclusive UI postures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetPosture {
    NotValidated,
    Validated,
    Terminal(TerminalReason),
}

impl WidgetPosture {
    pub fn is_terminal(&self) -> bool {
        matches!(self, WidgetPosture::Terminal(_))
    }
}

/// Result of the validate action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeValidation {
    /// Code stored as the session vote code, controls enabled
    Accepted(VoteCode),
    /// Format error reported, nothing stored
    Rejected,
    /// Validate action is disabled (widget is terminal)
    Ignored,
}

/// A vote ready to be sent to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteSubmission {
    pub item_id: ItemId,
    pub code: VoteCode,
}

/// Complete state of one widget instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetState {
    code_input: CodeInput,
    validate_enabled: bool,
    controls: VoteControls,
    status: Option<StatusMessage>,
    active_code: Option<VoteCode>,
    in_flight: Option<ItemId>,
    terminal: Option<TerminalReason>,
    /// Bumped every time the status area is written, even with the same text
    #[serde(skip)]
    status_revision: u64,
}

impl WidgetState {
    pub fn new(controls: VoteControls) -> Self {
        Self {
            code_input: CodeInput::default(),
            validate_enabled: true,
            controls,
            status: None,
            active_code: None,
            in_flight: None,
            terminal: None,
            status_revision: 0,
        }
    }

    /// Build a fresh widget with one control per item
    pub fn with_items(items: impl IntoIterator<Item = ItemId>) -> Result<Self, DomainError> {
        Ok(Self::new(VoteControls::new(items)?))
    }

    // ==================== Accessors ====================

    pub fn code_input(&self) -> &CodeInput {
        &self.code_input
    }

    pub fn is_validate_enabled(&self) -> bool {
        self.validate_enabled
    }

    pub fn controls(&self) -> &VoteControls {
        &self.controls
    }

    pub fn control(&self, item_id: &ItemId) -> Option<&VoteControl> {
        self.controls.get(item_id)
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn status_revision(&self) -> u64 {
        self.status_revision
    }

    pub fn active_code(&self) -> Option<&VoteCode> {
        self.active_code.as_ref()
    }

    pub fn in_flight(&self) -> Option<&ItemId> {
        self.in_flight.as_ref()
    }

    pub fn posture(&self) -> WidgetPosture {
        match (self.terminal, &self.active_code) {
            (Some(reason), _) => WidgetPosture::Terminal(reason),
            (None, Some(_)) => WidgetPosture::Validated,
            (None, None) => WidgetPosture::NotValidated,
        }
    }

    // ==================== Transitions ====================

    /// Type into the code input. Ignored while the input is disabled.
    pub fn enter_code(&mut self, text: &str) -> bool {
        if !self.code_input.enabled {
            return false;
        }
        self.code_input.value = text.to_string();
        true
    }

    /// Check the code input's current value and, if well formed, make it the
    /// session vote code and enable every control.
    pub fn validate_code(&mut self) -> CodeValidation {
        if !self.validate_enabled || self.terminal.is_some() {
            return CodeValidation::Ignored;
        }

        match VoteCode::parse(&self.code_input.value) {
            Ok(code) => {
                self.active_code = Some(code.clone());
                self.show(StatusMessage::success(messages::CODE_VALIDATED));
                self.controls.enable_all();
                // the pending control stays locked until its response arrives
                if let Some(pending) = self.in_flight.clone()
                    && let Some(control) = self.controls.get_mut(&pending)
                {
                    control.set_enabled(false);
                }
                CodeValidation::Accepted(code)
            }
            Err(_) => {
                self.show(StatusMessage::danger(messages::INVALID_CODE));
                CodeValidation::Rejected
            }
        }
    }

    /// Start a vote for `item_id`.
    ///
    /// On success the clicked control is disabled and the widget is marked
    /// busy until `finish_vote_recorded` or `finish_vote_failed` is applied.
    /// Only one submission may be in flight per widget, whichever control
    /// started it.
    pub fn begin_vote(&mut self, item_id: &ItemId) -> Result<VoteSubmission, DomainError> {
        // Every control is disabled once terminal; the click is ignored
        // and the closing status stays on screen.
        if self.terminal.is_some() {
            return Err(DomainError::ControlDisabled(item_id.to_string()));
        }

        let Some(code) = self.active_code.clone() else {
            self.show(StatusMessage::danger(messages::MISSING_CODE));
            return Err(DomainError::MissingCode);
        };

        let Some(enabled) = self.controls.get(item_id).map(VoteControl::is_enabled) else {
            self.show(StatusMessage::danger(messages::unknown_car(item_id.as_str())));
            return Err(DomainError::UnknownItem(item_id.to_string()));
        };

        if let Some(pending) = &self.in_flight {
            let pending = pending.to_string();
            self.show(StatusMessage::info(messages::SUBMISSION_PENDING));
            return Err(DomainError::SubmissionInFlight(pending));
        }

        if !enabled {
            return Err(DomainError::ControlDisabled(item_id.to_string()));
        }

        if let Some(control) = self.controls.get_mut(item_id) {
            control.set_enabled(false);
        }
        self.in_flight = Some(item_id.clone());

        Ok(VoteSubmission {
            item_id: item_id.clone(),
            code,
        })
    }

    /// The server accepted the vote: every control goes terminal and the
    /// code input is cleared and locked.
    pub fn finish_vote_recorded(&mut self, item_id: &ItemId) {
        self.clear_in_flight(item_id);
        self.show(StatusMessage::success(messages::VOTE_RECORDED));
        self.controls.mark_all_terminal(TerminalReason::VoteRecorded);
        self.code_input.value.clear();
        self.code_input.enabled = false;
        self.validate_enabled = false;
        self.active_code = None;
        self.terminal = Some(TerminalReason::VoteRecorded);
    }

    /// The vote was rejected or never reached the server. Only the clicked
    /// control is re-enabled; the code must be entered and validated again.
    pub fn finish_vote_failed(&mut self, item_id: &ItemId) {
        self.clear_in_flight(item_id);
        if self.terminal.is_none()
            && let Some(control) = self.controls.get_mut(item_id)
        {
            control.set_enabled(true);
        }
        self.show(StatusMessage::danger(messages::VOTE_FAILED));
        self.active_code = None;
        self.code_input.value.clear();
    }

    /// Apply the server's prior-vote report. Returns true if the widget
    /// transitioned to the "already voted" posture.
    pub fn apply_vote_check(&mut self, has_voted: bool) -> bool {
        if !has_voted || self.terminal.is_some() {
            return false;
        }
        self.controls.mark_all_terminal(TerminalReason::AlreadyVoted);
        self.active_code = None;
        self.terminal = Some(TerminalReason::AlreadyVoted);
        true
    }

    /// Write a message to the status area
    pub fn show(&mut self, message: StatusMessage) {
        self.status = Some(message);
        self.status_revision += 1;
    }

    fn clear_in_flight(&mut self, item_id: &ItemId) {
        if self.in_flight.as_ref() == Some(item_id) {
            self.in_flight = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::control::{ControlLabel, Emphasis};
    use crate::widget::status::StatusLevel;

    fn id(raw: &str) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    fn widget() -> WidgetState {
        WidgetState::with_items(["7", "8", "9"].map(id)).unwrap()
    }

    fn validated() -> WidgetState {
        let mut state = widget();
        state.enter_code("12345");
        assert!(matches!(state.validate_code(), CodeValidation::Accepted(_)));
        state
    }

    fn status_of(state: &WidgetState) -> (StatusLevel, &str) {
        let status = state.status().expect("status shown");
        (status.level, status.text.as_str())
    }

    // ==================== Initial state ====================

    #[test]
    fn test_initial_state() {
        let state = widget();
        assert_eq!(state.posture(), WidgetPosture::NotValidated);
        assert!(state.controls().all_disabled());
        assert!(state.code_input().is_enabled());
        assert!(state.is_validate_enabled());
        assert!(state.status().is_none());
    }

    // ==================== validate_code ====================

    #[test]
    fn test_validate_rejects_malformed_code() {
        let mut state = widget();
        for input in ["", "1234", "123456", "abcde", "12 345"] {
            state.enter_code(input);
            assert_eq!(state.validate_code(), CodeValidation::Rejected);
            assert!(state.active_code().is_none());
            assert!(state.controls().all_disabled());
            assert_eq!(
                status_of(&state),
                (StatusLevel::Danger, messages::INVALID_CODE)
            );
        }
    }

    #[test]
    fn test_validate_accepts_and_enables_all() {
        for input in ["12345", "00042", " 99999 "] {
            let mut state = widget();
            state.enter_code(input);
            let CodeValidation::Accepted(code) = state.validate_code() else {
                panic!("{input:?} should be accepted");
            };
            assert_eq!(code.as_str(), input.trim());
            assert_eq!(state.active_code(), Some(&code));
            assert!(state.controls().all_enabled());
            assert_eq!(state.posture(), WidgetPosture::Validated);
            assert_eq!(
                status_of(&state),
                (StatusLevel::Success, messages::CODE_VALIDATED)
            );
        }
    }

    #[test]
    fn test_rejected_code_keeps_previous_code() {
        let mut state = validated();
        state.enter_code("12");
        assert_eq!(state.validate_code(), CodeValidation::Rejected);
        assert_eq!(state.active_code().map(VoteCode::as_str), Some("12345"));
        assert!(state.controls().all_enabled());
    }

    // ==================== begin_vote ====================

    #[test]
    fn test_vote_without_code_is_refused() {
        let mut state = widget();
        let err = state.begin_vote(&id("7")).unwrap_err();
        assert_eq!(err, DomainError::MissingCode);
        assert!(state.in_flight().is_none());
        assert_eq!(
            status_of(&state),
            (StatusLevel::Danger, messages::MISSING_CODE)
        );
    }

    #[test]
    fn test_vote_for_unknown_car_is_refused() {
        let mut state = validated();
        let err = state.begin_vote(&id("42")).unwrap_err();
        assert_eq!(err, DomainError::UnknownItem("42".to_string()));
        assert_eq!(status_of(&state), (StatusLevel::Danger, "Unknown car: 42"));
        assert!(state.controls().all_enabled());
    }

    #[test]
    fn test_begin_vote_disables_only_clicked_control() {
        let mut state = validated();
        let submission = state.begin_vote(&id("8")).unwrap();
        assert_eq!(submission.item_id, id("8"));
        assert_eq!(submission.code.as_str(), "12345");
        assert_eq!(state.in_flight(), Some(&id("8")));

        assert!(!state.control(&id("8")).unwrap().is_enabled());
        assert!(state.control(&id("7")).unwrap().is_enabled());
        assert!(state.control(&id("9")).unwrap().is_enabled());
    }

    #[test]
    fn test_second_submission_is_refused_while_in_flight() {
        let mut state = validated();
        state.begin_vote(&id("7")).unwrap();

        let err = state.begin_vote(&id("9")).unwrap_err();
        assert_eq!(err, DomainError::SubmissionInFlight("7".to_string()));
        assert_eq!(
            status_of(&state),
            (StatusLevel::Info, messages::SUBMISSION_PENDING)
        );
        // the other control is untouched
        assert!(state.control(&id("9")).unwrap().is_enabled());
    }

    #[test]
    fn test_revalidating_keeps_pending_control_locked() {
        let mut state = validated();
        state.begin_vote(&id("7")).unwrap();
        state.enter_code("54321");
        state.validate_code();
        assert!(!state.control(&id("7")).unwrap().is_enabled());
        assert!(state.control(&id("8")).unwrap().is_enabled());
    }

    // ==================== finish_vote_* ====================

    #[test]
    fn test_vote_recorded_locks_everything() {
        let mut state = validated();
        state.begin_vote(&id("7")).unwrap();
        state.finish_vote_recorded(&id("7"));

        assert_eq!(
            state.posture(),
            WidgetPosture::Terminal(TerminalReason::VoteRecorded)
        );
        for control in state.controls() {
            assert!(!control.is_enabled());
            assert_eq!(control.label(), ControlLabel::VoteRecorded);
            assert_eq!(control.emphasis(), Emphasis::Secondary);
        }
        assert_eq!(state.code_input().value(), "");
        assert!(!state.code_input().is_enabled());
        assert!(!state.is_validate_enabled());
        assert!(state.active_code().is_none());
        assert!(state.in_flight().is_none());
        assert_eq!(
            status_of(&state),
            (StatusLevel::Success, messages::VOTE_RECORDED)
        );
    }

    #[test]
    fn test_vote_failed_reenables_only_clicked_control() {
        let mut state = validated();
        state.begin_vote(&id("9")).unwrap();
        let others_before: Vec<_> = state
            .controls()
            .iter()
            .filter(|c| c.item_id() != &id("9"))
            .cloned()
            .collect();
        state.finish_vote_failed(&id("9"));

        assert!(state.control(&id("9")).unwrap().is_enabled());
        assert_eq!(state.control(&id("9")).unwrap().label(), ControlLabel::Vote);
        let others_after: Vec<_> = state
            .controls()
            .iter()
            .filter(|c| c.item_id() != &id("9"))
            .cloned()
            .collect();
        assert_eq!(others_before, others_after);
        assert_eq!(state.code_input().value(), "");
        assert!(state.code_input().is_enabled());
        assert!(state.is_validate_enabled());
        assert!(state.active_code().is_none());
        assert_eq!(state.posture(), WidgetPosture::NotValidated);
        assert_eq!(
            status_of(&state),
            (StatusLevel::Danger, messages::VOTE_FAILED)
        );
    }

    #[test]
    fn test_failed_vote_requires_revalidation() {
        let mut state = validated();
        state.begin_vote(&id("9")).unwrap();
        state.finish_vote_failed(&id("9"));

        let err = state.begin_vote(&id("9")).unwrap_err();
        assert_eq!(err, DomainError::MissingCode);
    }

    // ==================== apply_vote_check ====================

    #[test]
    fn test_already_voted_check_locks_controls() {
        let mut state = widget();
        assert!(state.apply_vote_check(true));
        assert_eq!(
            state.posture(),
            WidgetPosture::Terminal(TerminalReason::AlreadyVoted)
        );
        for control in state.controls() {
            assert!(!control.is_enabled());
            assert_eq!(control.label().as_str(), "Already Voted");
        }
        // no status is written for the check
        assert!(state.status().is_none());
    }

    #[test]
    fn test_not_voted_check_changes_nothing() {
        let mut state = widget();
        let before = state.clone();
        assert!(!state.apply_vote_check(false));
        assert_eq!(state, before);
    }

    #[test]
    fn test_terminal_widget_ignores_validation() {
        let mut state = widget();
        state.apply_vote_check(true);
        state.enter_code("12345");
        assert_eq!(state.validate_code(), CodeValidation::Ignored);
        assert!(state.controls().all_disabled());
        assert!(state.active_code().is_none());
    }

    #[test]
    fn test_vote_after_recorded_is_ignored() {
        let mut state = validated();
        state.begin_vote(&id("7")).unwrap();
        state.finish_vote_recorded(&id("7"));
        let before = state.clone();

        let err = state.begin_vote(&id("8")).unwrap_err();
        assert_eq!(err, DomainError::ControlDisabled("8".to_string()));
        assert_eq!(
            status_of(&state),
            (StatusLevel::Success, messages::VOTE_RECORDED)
        );
        assert_eq!(state.status_revision(), before.status_revision());
        assert_eq!(state, before);
    }

    #[test]
    fn test_vote_after_already_voted_is_ignored() {
        let mut state = widget();
        state.apply_vote_check(true);

        let err = state.begin_vote(&id("7")).unwrap_err();
        assert_eq!(err, DomainError::ControlDisabled("7".to_string()));
        assert!(state.status().is_none());
        assert!(state.in_flight().is_none());
    }

    #[test]
    fn test_disabled_input_ignores_typing() {
        let mut state = validated();
        state.begin_vote(&id("7")).unwrap();
        state.finish_vote_recorded(&id("7"));
        assert!(!state.enter_code("55555"));
        assert_eq!(state.code_input().value(), "");
    }

    #[test]
    fn test_status_revision_counts_every_write() {
        let mut state = widget();
        state.enter_code("1");
        state.validate_code();
        state.validate_code();
        assert_eq!(state.status_revision(), 2);
    }

    #[test]
    fn test_serializes_to_json() {
        let state = validated();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["status"]["level"], "success");
        assert_eq!(json["controls"][0]["label"], "vote");
        assert_eq!(json["active_code"], "12345");
    }
}
