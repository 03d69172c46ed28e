//! Output format value object

use serde::{Deserialize, Serialize};

/// How a front end prints the widget
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored console rendering of the widget (default)
    #[default]
    Text,
    /// Widget state as JSON
    Json,
}
