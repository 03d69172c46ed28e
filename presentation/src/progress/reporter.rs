//! Progress reporting for vote submissions

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use derby_application::WidgetView;
use derby_domain::{Car, ItemId, StatusMessage};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Prints status messages and shows a spinner while a vote is in flight
pub struct ProgressReporter {
    cars: Vec<Car>,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new(cars: Vec<Car>) -> Self {
        Self {
            cars,
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl WidgetView for ProgressReporter {
    fn on_status(&self, status: &StatusMessage) {
        let line = ConsoleFormatter::format_status(status);
        let spinner = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        match spinner.as_ref() {
            // Keep the line from being overdrawn by the next tick
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }

    fn on_submission_start(&self, item_id: &ItemId) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Voting");
        pb.set_message(format!(
            "Submitting vote for {}...",
            ConsoleFormatter::car_name(item_id, &self.cars)
        ));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.spinner.lock().unwrap_or_else(PoisonError::into_inner) = Some(pb);
    }

    fn on_submission_end(&self, _item_id: &ItemId, _recorded: bool) {
        if let Some(pb) = self
            .spinner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress {
    cars: Vec<Car>,
}

impl SimpleProgress {
    pub fn new(cars: Vec<Car>) -> Self {
        Self { cars }
    }
}

impl WidgetView for SimpleProgress {
    fn on_status(&self, status: &StatusMessage) {
        println!("{}", ConsoleFormatter::format_status(status));
    }

    fn on_submission_start(&self, item_id: &ItemId) {
        println!(
            "{} Submitting vote for {}",
            "->".cyan(),
            ConsoleFormatter::car_name(item_id, &self.cars).bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_is_cleared_after_submission() {
        let reporter = ProgressReporter::new(vec![]);
        let id = ItemId::new("7").unwrap();

        reporter.on_submission_start(&id);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_status(&StatusMessage::info("still working"));
        reporter.on_submission_end(&id, true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_submission_end_without_start_is_harmless() {
        let reporter = ProgressReporter::new(vec![]);
        reporter.on_submission_end(&ItemId::new("7").unwrap(), false);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
