//! Output formatter trait

use crate::output::console::ConsoleFormatter;
use derby_application::VoteOutcome;
use derby_domain::{Car, OutputFormat, WidgetState};
use serde_json::{Value, json};

/// Trait for formatting the widget and vote results
pub trait WidgetFormatter: Send + Sync {
    /// Format the current widget
    fn format_widget(&self, state: &WidgetState, cars: &[Car]) -> String;

    /// Format the result of one vote request
    fn format_outcome(&self, outcome: &VoteOutcome, cars: &[Car]) -> String;

    /// Format the end of a one-shot run: the vote result (if a vote was
    /// requested) followed by the final widget
    fn format_run(
        &self,
        state: &WidgetState,
        outcome: Option<&VoteOutcome>,
        cars: &[Car],
    ) -> String {
        let widget = self.format_widget(state, cars);
        match outcome {
            Some(outcome) => format!("{}\n\n{}", self.format_outcome(outcome, cars), widget),
            None => widget,
        }
    }
}

/// Formats the widget as JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn outcome_value(outcome: &VoteOutcome) -> Value {
        match outcome {
            VoteOutcome::Recorded(receipt) => json!({
                "outcome": "recorded",
                "submitted": outcome.was_submitted(),
                "receipt": receipt,
            }),
            VoteOutcome::Failed(e) => json!({
                "outcome": "failed",
                "submitted": outcome.was_submitted(),
                "error": e.to_string(),
            }),
            VoteOutcome::Refused(e) => json!({
                "outcome": "refused",
                "submitted": outcome.was_submitted(),
                "reason": e.to_string(),
            }),
        }
    }

    fn pretty(value: &Value) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl WidgetFormatter for JsonFormatter {
    fn format_widget(&self, state: &WidgetState, _cars: &[Car]) -> String {
        serde_json::to_string_pretty(state).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_outcome(&self, outcome: &VoteOutcome, _cars: &[Car]) -> String {
        Self::pretty(&Self::outcome_value(outcome))
    }

    fn format_run(
        &self,
        state: &WidgetState,
        outcome: Option<&VoteOutcome>,
        _cars: &[Car],
    ) -> String {
        let mut value = json!({ "widget": state });
        if let Some(outcome) = outcome {
            value["vote"] = Self::outcome_value(outcome);
        }
        Self::pretty(&value)
    }
}

/// Pick the formatter for an output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn WidgetFormatter> {
    match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
