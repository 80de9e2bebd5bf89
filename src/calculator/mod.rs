//! Calculator core.
//!
//! This module provides:
//! - The operators and their arithmetic
//! - Conversion between display text and numbers
//! - Pure state transitions and the engine that owns state and history
//! - Display formatting for the readout
//! - Copying results to the clipboard

mod clipboard;
pub mod engine;
mod format;
mod number;
mod operator;
pub mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::{CalculatorEngine, Intent, Snapshot};
pub use format::format_display;
pub use number::{number_to_text, parse_number};
pub use operator::{
    Digit, InvalidDigit, InvalidOperator, Operator, UnaryOp, calculate, evaluate_symbol,
};
pub use state::{CalculatorState, Evaluation, Pending};
