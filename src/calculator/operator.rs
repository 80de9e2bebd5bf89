//! Operators, digits and the arithmetic behind them.

use std::fmt;
use thiserror::Error;

/// A binary operator that can be pending between two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
    Power,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Remainder,
        Self::Power,
    ];

    /// The symbol shown on the keypad and in history expressions.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Remainder => '%',
            Self::Power => '^',
        }
    }

    /// Look up an operator by its symbol.
    ///
    /// Accepts the ASCII aliases `*`, `x` and `/` next to the keypad symbols.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' | 'x' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            '%' => Some(Self::Remainder),
            '^' => Some(Self::Power),
            _ => None,
        }
    }

    /// Apply the operator to two operands.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        calculate(a, b, self)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returned when a character is not an operator symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not an operator")]
pub struct InvalidOperator(pub char);

impl TryFrom<char> for Operator {
    type Error = InvalidOperator;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol).ok_or(InvalidOperator(symbol))
    }
}

/// A single decimal digit key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value (0..=9).
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// Returned when a character is not a decimal digit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a digit")]
pub struct InvalidDigit(pub char);

impl TryFrom<char> for Digit {
    type Error = InvalidDigit;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operations applied directly to the displayed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// x²
    Square,
    /// √x
    SquareRoot,
    /// 1/x
    Reciprocal,
}

impl UnaryOp {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Square => value * value,
            // Negative input yields NaN.
            Self::SquareRoot => value.sqrt(),
            Self::Reciprocal => 1.0 / value,
        }
    }
}

/// Evaluate `a <op> b`.
///
/// Division by zero and other invalid operations are not trapped; they
/// produce the usual IEEE infinities and NaN.
pub fn calculate(a: f64, b: f64, op: Operator) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => a / b,
        // Rust's float remainder keeps the sign of the dividend.
        Operator::Remainder => a % b,
        Operator::Power => power(a, b),
    }
}

/// Evaluate `a <symbol> b` for a raw keypad symbol.
///
/// An unrecognised symbol leaves the right-hand operand unchanged.
pub fn evaluate_symbol(a: f64, b: f64, symbol: char) -> f64 {
    Operator::from_symbol(symbol).map_or(b, |op| calculate(a, b, op))
}

/// `a` raised to `b`.
///
/// `powf` treats `1^NaN` and `(±1)^±∞` as 1; both are NaN here.
fn power(a: f64, b: f64) -> f64 {
    if b.is_nan() || (a.abs() == 1.0 && b.is_infinite()) {
        return f64::NAN;
    }
    a.powf(b)
}
