//! Calculator state and the pure transitions between states.
//!
//! Every transition takes the current state by reference and returns the
//! next one. Nothing here owns history or talks to a renderer; that is the
//! engine's job.

use super::number::{number_to_text, parse_number};
use super::operator::{Digit, Operator, UnaryOp, calculate};

/// A binary operation waiting for its right-hand operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pending {
    /// Left-hand operand.
    pub left: f64,
    /// Operator to apply once the right-hand operand is known.
    pub operator: Operator,
}

impl Pending {
    /// Label shown above the readout, e.g. `"2 +"`.
    pub fn label(&self) -> String {
        format!("{} {}", number_to_text(self.left), self.operator)
    }
}

/// The complete numeric state of the calculator.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorState {
    display: String,
    pending: Option<Pending>,
    waiting_for_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            waiting_for_operand: false,
        }
    }
}

impl CalculatorState {
    /// Raw display text (not formatted).
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The display parsed as a number.
    pub fn display_value(&self) -> f64 {
        parse_number(&self.display)
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Left-hand operand of the pending operation.
    pub fn previous_value(&self) -> Option<f64> {
        self.pending.map(|p| p.left)
    }

    /// The pending operator.
    pub fn operation(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Whether the next digit starts a new number.
    pub fn waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    fn with_display(&self, display: String) -> Self {
        Self {
            display,
            ..self.clone()
        }
    }
}

/// A completed `left <op> right` evaluation produced by equals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
    pub value: f64,
}

impl Evaluation {
    /// Human-readable expression, e.g. `"2 + 3"`.
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            number_to_text(self.left),
            self.operator,
            number_to_text(self.right)
        )
    }

    /// Result text as it is written back to the display.
    pub fn result(&self) -> String {
        number_to_text(self.value)
    }
}

/// Reset everything except history.
pub fn clear_all() -> CalculatorState {
    CalculatorState::default()
}

/// Append a digit, or start a new number after an operator.
pub fn input_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    let d = digit.as_char();

    if state.waiting_for_operand {
        return CalculatorState {
            display: d.to_string(),
            waiting_for_operand: false,
            ..state.clone()
        };
    }

    let display = if state.display == "0" {
        d.to_string()
    } else {
        format!("{}{}", state.display, d)
    };
    state.with_display(display)
}

/// Add a decimal point; at most one per number.
pub fn input_decimal(state: &CalculatorState) -> CalculatorState {
    if state.waiting_for_operand {
        return CalculatorState {
            display: "0.".to_string(),
            waiting_for_operand: false,
            ..state.clone()
        };
    }

    if state.display.contains('.') {
        return state.clone();
    }
    state.with_display(format!("{}.", state.display))
}

/// Negate the displayed value.
pub fn toggle_sign(state: &CalculatorState) -> CalculatorState {
    state.with_display(number_to_text(-state.display_value()))
}

/// Press a binary operator.
///
/// With an operation already pending the pending one is evaluated first, so
/// chains run strictly left to right: `2 + 3 × 4` is `(2 + 3) × 4`.
pub fn perform_operation(state: &CalculatorState, next: Operator) -> CalculatorState {
    let input = state.display_value();

    let (display, left) = match state.pending {
        None => (state.display.clone(), input),
        Some(Pending { left, operator }) => {
            let value = calculate(left, input, operator);
            (number_to_text(value), value)
        }
    };

    CalculatorState {
        display,
        pending: Some(Pending {
            left,
            operator: next,
        }),
        waiting_for_operand: true,
    }
}

/// Press equals.
///
/// Returns the unchanged state and no evaluation when nothing is pending.
pub fn calculate_result(state: &CalculatorState) -> (CalculatorState, Option<Evaluation>) {
    let Some(Pending { left, operator }) = state.pending else {
        return (state.clone(), None);
    };

    let right = state.display_value();
    let evaluation = Evaluation {
        left,
        operator,
        right,
        value: calculate(left, right, operator),
    };

    let next = CalculatorState {
        display: evaluation.result(),
        pending: None,
        waiting_for_operand: false,
    };
    (next, Some(evaluation))
}

/// Apply x², √x or 1/x to the displayed value.
///
/// The pending operation is left alone, so the result can serve as the
/// right-hand operand of a following equals.
pub fn apply_unary(state: &CalculatorState, op: UnaryOp) -> CalculatorState {
    CalculatorState {
        display: number_to_text(op.apply(state.display_value())),
        waiting_for_operand: true,
        ..state.clone()
    }
}

/// Overwrite the display with a recalled result.
pub fn recall(state: &CalculatorState, result: &str) -> CalculatorState {
    state.with_display(result.to_string())
}
