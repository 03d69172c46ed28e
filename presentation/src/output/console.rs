//! Console rendering of the voting widget

use crate::output::formatter::WidgetFormatter;
use colored::{ColoredString, Colorize};
use derby_application::VoteOutcome;
use derby_domain::{
    Car, ControlLabel, Emphasis, ItemId, StatusLevel, StatusMessage, VoteControl, WidgetState,
};

/// Width of the widest control label, "Already Voted"
const LABEL_WIDTH: usize = 13;

/// Formats the widget for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the whole widget: code input, status area and vote controls
    pub fn format(state: &WidgetState, cars: &[Car]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Derby Vote"));
        output.push('\n');

        // Code input and validate action
        let input = state.code_input();
        let value = if input.value().is_empty() {
            "_____".dimmed()
        } else {
            input.value().normal()
        };
        let input_note = if input.is_enabled() {
            String::new()
        } else {
            format!(" {}", "(locked)".dimmed())
        };
        let validate = if state.is_validate_enabled() {
            "[Validate]".cyan().bold()
        } else {
            "[Validate]".dimmed()
        };
        output.push_str(&format!(
            "{} {}{}  {}\n",
            "Code:".cyan().bold(),
            value,
            input_note,
            validate
        ));

        // Status area
        if let Some(status) = state.status() {
            output.push_str(&format!("{}\n", Self::format_status(status)));
        }
        output.push('\n');

        // Vote controls
        if state.controls().is_empty() {
            output.push_str(&format!("{}\n", "No cars configured".dimmed()));
        }
        for control in state.controls() {
            output.push_str(&format!(
                "  {} {}\n",
                Self::button(control),
                Self::car_name(control.item_id(), cars)
            ));
        }

        output
    }

    /// One status line, colored by severity
    pub fn format_status(status: &StatusMessage) -> String {
        let text = match status.level {
            StatusLevel::Info => status.text.cyan(),
            StatusLevel::Success => status.text.green(),
            StatusLevel::Danger => status.text.red().bold(),
        };
        format!("{} {}", Self::status_marker(status.level), text)
    }

    /// Summary line for a finished vote request
    pub fn format_outcome(outcome: &VoteOutcome, cars: &[Car]) -> String {
        match outcome {
            VoteOutcome::Recorded(receipt) => {
                let mut line = format!(
                    "{} Vote for {} recorded at {}",
                    "v".green(),
                    Self::car_name(&receipt.item_id, cars).bold(),
                    receipt.recorded_at.format("%H:%M:%S")
                );
                if let Some(message) = &receipt.message {
                    line.push_str(&format!(" ({})", message));
                }
                line
            }
            VoteOutcome::Failed(e) => format!("{} Vote not recorded: {}", "x".red(), e),
            VoteOutcome::Refused(e) => format!("{} {}", "-".yellow(), e),
        }
    }

    /// Display name of the car behind a control
    pub fn car_name(item_id: &ItemId, cars: &[Car]) -> String {
        cars.iter()
            .find(|car| &car.id == item_id)
            .map(Car::display_name)
            .unwrap_or_else(|| Car::new(item_id.clone()).display_name())
    }

    fn button(control: &VoteControl) -> ColoredString {
        let text = format!("[{:<width$}]", control.label().as_str(), width = LABEL_WIDTH);
        match (control.is_enabled(), control.emphasis(), control.label()) {
            (true, Emphasis::Primary, _) => text.green().bold(),
            (_, _, ControlLabel::VoteRecorded) => text.blue(),
            (_, Emphasis::Secondary, _) => text.bright_black(),
            (false, Emphasis::Primary, _) => text.dimmed(),
        }
    }

    fn status_marker(level: StatusLevel) -> ColoredString {
        match level {
            StatusLevel::Info => "i".cyan(),
            StatusLevel::Success => "v".green(),
            StatusLevel::Danger => "!".red().bold(),
        }
    }

    fn header(title: &str) -> String {
        format!(
            "{}\n{}\n{}\n",
            "+------------------------------------------+".cyan(),
            format!("|  {:<40}|", title).cyan().bold(),
            "+------------------------------------------+".cyan()
        )
    }
}

impl WidgetFormatter for ConsoleFormatter {
    fn format_widget(&self, state: &WidgetState, cars: &[Car]) -> String {
        Self::format(state, cars)
    }

    fn format_outcome(&self, outcome: &VoteOutcome, cars: &[Car]) -> String {
        Self::format_outcome(outcome, cars)
    }
}
