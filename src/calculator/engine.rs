//! The calculator engine: state, history and intent handling.

use super::format::format_display;
use super::operator::{Digit, Operator, UnaryOp};
use super::state::{self, CalculatorState};
use crate::history::{HistoryItem, HistoryLog};
use serde::Serialize;

/// A user action the engine understands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    /// A digit key.
    Digit(Digit),
    /// The decimal point key.
    Decimal,
    /// The ± key.
    ToggleSign,
    /// A binary operator key.
    Operator(Operator),
    /// The = key.
    Equals,
    /// x², √x or 1/x.
    Unary(UnaryOp),
    /// The C key.
    ClearAll,
    /// Empty the history.
    ClearHistory,
    /// Recall the history item with the given id.
    SelectHistory(u64),
}

/// Everything a presentation layer needs to draw the calculator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    /// Formatted readout text.
    pub display_text: String,
    /// Unformatted display text.
    pub display: String,
    /// Pending operand and operator, e.g. `"2 +"`.
    pub pending_operation_label: Option<String>,
    /// History, newest first.
    pub history: Vec<HistoryItem>,
}

/// Owns the calculator state and history.
#[derive(Debug, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    history: HistoryLog,
    next_id: u64,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Handle an intent and return the resulting snapshot.
    pub fn dispatch(&mut self, intent: Intent) -> Snapshot {
        tracing::debug!(?intent, "Handling intent");

        match intent {
            Intent::Digit(digit) => self.input_digit(digit),
            Intent::Decimal => self.input_decimal(),
            Intent::ToggleSign => self.toggle_sign(),
            Intent::Operator(op) => self.perform_operation(op),
            Intent::Equals => {
                self.calculate_result();
            }
            Intent::Unary(op) => self.apply_unary(op),
            Intent::ClearAll => self.clear_all(),
            Intent::ClearHistory => self.clear_history(),
            Intent::SelectHistory(id) => match self.history.get(id).cloned() {
                Some(item) => self.select_history_item(&item),
                None => tracing::warn!(id, "No history item with this id"),
            },
        }

        self.snapshot()
    }

    /// Current renderable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display_text: format_display(self.state.display()),
            display: self.state.display().to_string(),
            pending_operation_label: self.state.pending().map(|p| p.label()),
            history: self.history.items().to_vec(),
        }
    }

    pub fn clear_all(&mut self) {
        self.state = state::clear_all();
    }

    pub fn input_digit(&mut self, digit: Digit) {
        self.state = state::input_digit(&self.state, digit);
    }

    pub fn input_decimal(&mut self) {
        self.state = state::input_decimal(&self.state);
    }

    pub fn toggle_sign(&mut self) {
        self.state = state::toggle_sign(&self.state);
    }

    pub fn perform_operation(&mut self, op: Operator) {
        self.state = state::perform_operation(&self.state, op);
    }

    /// Press equals.
    ///
    /// Returns the history item recorded for the calculation, or `None` when
    /// no operation was pending.
    pub fn calculate_result(&mut self) -> Option<HistoryItem> {
        let (next, evaluation) = state::calculate_result(&self.state);
        self.state = next;

        let evaluation = evaluation?;
        self.next_id += 1;
        let item = HistoryItem::from_evaluation(self.next_id, &evaluation);
        tracing::info!(
            expression = %item.expression,
            result = %item.result,
            "Recorded calculation"
        );
        self.history.push(item.clone());
        Some(item)
    }

    pub fn apply_unary(&mut self, op: UnaryOp) {
        self.state = state::apply_unary(&self.state, op);
    }

    pub fn square(&mut self) {
        self.apply_unary(UnaryOp::Square);
    }

    pub fn square_root(&mut self) {
        self.apply_unary(UnaryOp::SquareRoot);
    }

    pub fn reciprocal(&mut self) {
        self.apply_unary(UnaryOp::Reciprocal);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Put a previous result on the display.
    pub fn select_history_item(&mut self, item: &HistoryItem) {
        self.state = state::recall(&self.state, &item.result);
    }
}
