//! Keystroke parsing for the terminal front end.
//!
//! A line of input is split on whitespace. Each word is either a named key
//! (`sqrt`, `clear`, `history`, ...) or a run of keypad characters such as
//! `12+3=` that is expanded one key at a time.

use crate::calculator::{Digit, Intent, Operator, UnaryOp};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches words made only of keypad characters.
    /// Allows: digits, decimal point, operators and equals.
    static ref KEY_RUN: Regex = Regex::new(r"^[0-9.+\-*/x×÷%^=]+$").unwrap();
}

/// Something the front end should do in response to input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Forward an intent to the engine.
    Intent(Intent),
    /// Recall the n-th history entry (1-based, newest first).
    UseHistory(usize),
    /// Show the history view.
    ShowHistory,
    /// Copy the display to the clipboard.
    Copy,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("unknown key '{0}' (type 'help' for the list of keys)")]
    UnknownKey(String),
    #[error("'use' needs a history position")]
    MissingPosition,
    #[error("invalid history position '{0}'")]
    InvalidPosition(String),
}

/// Help text listing every key the parser understands.
pub const HELP: &str = "\
keys:
  0-9 .            digits and decimal point
  + - * x × / ÷ % ^  operators
  =                equals
  neg, ±           toggle sign
  sq, x²           square
  sqrt, √          square root
  inv, 1/x         reciprocal
  c, clear, ac     clear all
commands:
  history, h       show history
  use <n>          recall the n-th history entry
  clear-history    empty the history
  copy             copy the display to the clipboard
  help             show this help
  quit, q, exit    leave";

/// Parse a line of keystrokes into commands.
///
/// The whole line is rejected if any word is not understood.
pub fn parse_line(line: &str) -> Result<Vec<Command>, ParseKeyError> {
    let mut commands = Vec::new();
    let mut words = line.split_whitespace();

    while let Some(word) = words.next() {
        if word.eq_ignore_ascii_case("use") {
            let position = words.next().ok_or(ParseKeyError::MissingPosition)?;
            commands.push(Command::UseHistory(parse_position(position)?));
            continue;
        }

        if let Some(command) = named_key(word) {
            commands.push(command);
            continue;
        }

        if !looks_like_key_run(word) {
            return Err(ParseKeyError::UnknownKey(word.to_string()));
        }
        commands.extend(word.chars().filter_map(key_intent).map(Command::Intent));
    }

    Ok(commands)
}

/// Check if a word consists only of keypad characters.
pub fn looks_like_key_run(word: &str) -> bool {
    KEY_RUN.is_match(word)
}

fn parse_position(word: &str) -> Result<usize, ParseKeyError> {
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseKeyError::InvalidPosition(word.to_string())),
    }
}

fn named_key(word: &str) -> Option<Command> {
    let command = match word.to_lowercase().as_str() {
        "c" | "clear" | "ac" => Command::Intent(Intent::ClearAll),
        "neg" | "±" => Command::Intent(Intent::ToggleSign),
        "sq" | "x²" => Command::Intent(Intent::Unary(UnaryOp::Square)),
        "sqrt" | "√" => Command::Intent(Intent::Unary(UnaryOp::SquareRoot)),
        "inv" | "1/x" => Command::Intent(Intent::Unary(UnaryOp::Reciprocal)),
        "clear-history" => Command::Intent(Intent::ClearHistory),
        "history" | "h" => Command::ShowHistory,
        "copy" => Command::Copy,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Map one keypad character to an intent.
fn key_intent(key: char) -> Option<Intent> {
    match key {
        '.' => Some(Intent::Decimal),
        '=' => Some(Intent::Equals),
        _ => Digit::try_from(key)
            .map(Intent::Digit)
            .ok()
            .or_else(|| Operator::from_symbol(key).map(Intent::Operator)),
    }
}
