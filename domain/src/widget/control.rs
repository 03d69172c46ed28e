//! Vote controls (the buttons, one per car)

use crate::core::error::DomainError;
use crate::core::item::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Why the widget stopped accepting votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalReason {
    /// The server reported a vote from an earlier visit
    AlreadyVoted,
    /// A vote was accepted during this session
    VoteRecorded,
}

/// Text shown on a vote control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlLabel {
    Vote,
    AlreadyVoted,
    VoteRecorded,
}

impl ControlLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlLabel::Vote => "Vote",
            ControlLabel::AlreadyVoted => "Already Voted",
            ControlLabel::VoteRecorded => "Vote Recorded",
        }
    }
}

impl From<TerminalReason> for ControlLabel {
    fn from(reason: TerminalReason) -> Self {
        match reason {
            TerminalReason::AlreadyVoted => ControlLabel::AlreadyVoted,
            TerminalReason::VoteRecorded => ControlLabel::VoteRecorded,
        }
    }
}

impl std::fmt::Display for ControlLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual weight of a control; terminal controls are de-emphasized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Primary,
    Secondary,
}

/// A single vote button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteControl {
    item_id: ItemId,
    label: ControlLabel,
    enabled: bool,
    emphasis: Emphasis,
}

impl VoteControl {
    /// A fresh control: labeled "Vote", disabled until a code is validated
    pub fn new(item_id: ItemId) -> Self {
        Self {
            item_id,
            label: ControlLabel::Vote,
            enabled: false,
            emphasis: Emphasis::Primary,
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn label(&self) -> ControlLabel {
        self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn emphasis(&self) -> Emphasis {
        self.emphasis
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn mark_terminal(&mut self, reason: TerminalReason) {
        self.enabled = false;
        self.label = reason.into();
        self.emphasis = Emphasis::Secondary;
    }
}

/// The full set of vote controls, mutated in lock-step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteControls {
    controls: Vec<VoteControl>,
}

impl VoteControls {
    /// Build one control per item, in the given order
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        let mut controls = Vec::new();
        for item in items {
            if !seen.insert(item.clone()) {
                return Err(DomainError::DuplicateItem(item.to_string()));
            }
            controls.push(VoteControl::new(item));
        }
        Ok(Self { controls })
    }

    pub fn get(&self, item_id: &ItemId) -> Option<&VoteControl> {
        self.controls.iter().find(|c| c.item_id() == item_id)
    }

    pub(crate) fn get_mut(&mut self, item_id: &ItemId) -> Option<&mut VoteControl> {
        self.controls.iter_mut().find(|c| c.item_id() == item_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VoteControl> {
        self.controls.iter()
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn all_enabled(&self) -> bool {
        self.controls.iter().all(VoteControl::is_enabled)
    }

    pub fn all_disabled(&self) -> bool {
        self.controls.iter().all(|c| !c.is_enabled())
    }

    pub(crate) fn enable_all(&mut self) {
        for control in &mut self.controls {
            control.set_enabled(true);
        }
    }

    pub(crate) fn mark_all_terminal(&mut self, reason: TerminalReason) {
        for control in &mut self.controls {
            control.mark_terminal(reason);
        }
    }
}

impl<'a> IntoIterator for &'a VoteControls {
    type Item = &'a VoteControl;
    type IntoIter = std::slice::Iter<'a, VoteControl>;

    fn into_iter(self) -> Self::IntoIter {
        self.controls.iter()
    }
}
