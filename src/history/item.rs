//! A single entry in the calculation history.

use crate::calculator::Evaluation;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A completed calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryItem {
    /// Unique identifier for this item.
    pub id: u64,
    /// The operands and operator, e.g. `"2 + 3"`.
    pub expression: String,
    /// The result as written to the display.
    pub result: String,
    /// When the calculation was made.
    pub timestamp: DateTime<Local>,
}

impl HistoryItem {
    /// Create a history item from an evaluation made now.
    pub fn from_evaluation(id: u64, evaluation: &Evaluation) -> Self {
        Self::with_timestamp(id, evaluation, Local::now())
    }

    pub fn with_timestamp(id: u64, evaluation: &Evaluation, timestamp: DateTime<Local>) -> Self {
        Self {
            id,
            expression: evaluation.expression(),
            result: evaluation.result(),
            timestamp,
        }
    }

    /// Whether the result is an invalid number (NaN, Infinity).
    pub fn is_error(&self) -> bool {
        matches!(self.result.as_str(), "NaN" | "Infinity" | "-Infinity")
    }

    /// Local time of day the calculation was made, using a chrono format string.
    pub fn time_label(&self, format: &str) -> String {
        self.timestamp.format(format).to_string()
    }
}
