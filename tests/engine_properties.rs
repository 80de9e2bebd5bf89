//! End-to-end behaviour of the calculator engine.
//!
//! Drives the engine through its public intents only, the way a front end
//! does, and checks the resulting snapshots.

use proptest::prelude::*;
use zcalc::calculator::{
    CalculatorEngine, Digit, Intent, Operator, Snapshot, UnaryOp, format_display,
};
use zcalc::history::HISTORY_LIMIT;

fn digit(c: char) -> Intent {
    Intent::Digit(Digit::try_from(c).unwrap())
}

fn op(symbol: char) -> Intent {
    Intent::Operator(Operator::try_from(symbol).unwrap())
}

/// Dispatch each key of `keys` and return the last snapshot.
fn press(engine: &mut CalculatorEngine, keys: &str) -> Snapshot {
    let mut snapshot = engine.snapshot();
    for key in keys.chars() {
        let intent = match key {
            '0'..='9' => digit(key),
            '.' => Intent::Decimal,
            '=' => Intent::Equals,
            'n' => Intent::ToggleSign,
            'C' => Intent::ClearAll,
            _ => op(key),
        };
        snapshot = engine.dispatch(intent);
    }
    snapshot
}

#[test]
fn test_leading_zeros() {
    let mut engine = CalculatorEngine::new();
    let snapshot = press(&mut engine, "005");
    assert_eq!(snapshot.display, "5");
}

#[test]
fn test_chaining_without_precedence() {
    let mut engine = CalculatorEngine::new();
    let snapshot = press(&mut engine, "2+3×4=");
    assert_eq!(snapshot.display, "20");
    assert_eq!(snapshot.history.len(), 1);
}

#[test]
fn test_long_chain() {
    let mut engine = CalculatorEngine::new();
    let snapshot = press(&mut engine, "10-4÷2^3%5=");
    // ((10 - 4) ÷ 2) ^ 3 % 5 = 27 % 5
    assert_eq!(snapshot.display, "2");
}

#[test]
fn test_pending_label_tracks_chain() {
    let mut engine = CalculatorEngine::new();
    assert_eq!(press(&mut engine, "2+").pending_operation_label.as_deref(), Some("2 +"));
    assert_eq!(press(&mut engine, "3×").pending_operation_label.as_deref(), Some("5 ×"));
    assert_eq!(press(&mut engine, "4=").pending_operation_label, None);
}

#[test]
fn test_equals_with_nothing_pending() {
    let mut engine = CalculatorEngine::new();
    press(&mut engine, "7");
    let snapshot = engine.dispatch(Intent::Equals);
    assert_eq!(snapshot.display, "7");
    assert!(snapshot.history.is_empty());
}

#[test]
fn test_repeated_equals_is_noop() {
    let mut engine = CalculatorEngine::new();
    let first = press(&mut engine, "2×3=");
    let second = engine.dispatch(Intent::Equals);
    assert_eq!(first.display, second.display);
    assert_eq!(second.history.len(), 1);
}

#[test]
fn test_history_cap() {
    let mut engine = CalculatorEngine::new();
    for n in 1..=11 {
        press(&mut engine, "C");
        press(&mut engine, &format!("{n}+0="));
    }
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.history.len(), HISTORY_LIMIT);
    assert_eq!(snapshot.history[0].expression, "11 + 0");
    assert_eq!(snapshot.history[9].expression, "2 + 0");
}

#[test]
fn test_decimal_idempotence() {
    let mut engine = CalculatorEngine::new();
    engine.dispatch(Intent::Decimal);
    let snapshot = engine.dispatch(Intent::Decimal);
    assert_eq!(snapshot.display.matches('.').count(), 1);
}

#[test]
fn test_division_by_zero() {
    let mut engine = CalculatorEngine::new();
    let snapshot = press(&mut engine, "5÷0=");
    assert_eq!(snapshot.display, "Infinity");
    assert_eq!(snapshot.history[0].expression, "5 ÷ 0");
}

#[test]
fn test_infinity_propagates() {
    let mut engine = CalculatorEngine::new();
    let snapshot = press(&mut engine, "5÷0-3=");
    assert_eq!(snapshot.display, "Infinity");

    let snapshot = press(&mut engine, "×0=");
    assert_eq!(snapshot.display, "NaN");
    assert_eq!(snapshot.display_text, "NaN");

    let snapshot = engine.dispatch(Intent::ClearAll);
    assert_eq!(snapshot.display, "0");
}

#[test]
fn test_unary_ops_mid_chain() {
    let mut engine = CalculatorEngine::new();
    press(&mut engine, "1+8");
    engine.dispatch(Intent::Unary(UnaryOp::Reciprocal));
    let snapshot = engine.dispatch(Intent::Equals);
    assert_eq!(snapshot.display, "1.125");
    assert_eq!(snapshot.history[0].expression, "1 + 0.125");
}

#[test]
fn test_small_values_only_display_as_zero() {
    let mut engine = CalculatorEngine::new();
    let snapshot = press(&mut engine, "1÷10000000=");
    assert_eq!(snapshot.display, "1e-7");
    assert_eq!(snapshot.display_text, "0");

    // The underlying value is still used in later operations.
    let snapshot = press(&mut engine, "×10000000=");
    assert_eq!(snapshot.display, "1");
}

#[test]
fn test_display_formatting() {
    assert_eq!(format_display("0.0000001"), "0");
    assert_eq!(format_display("1500000000"), "1.50e+9");
}

#[test]
fn test_recall_history_item() {
    let mut engine = CalculatorEngine::new();
    press(&mut engine, "9×9=C");
    let id = engine.history().items()[0].id;
    let snapshot = engine.dispatch(Intent::SelectHistory(id));
    assert_eq!(snapshot.display, "81");
    assert_eq!(snapshot.pending_operation_label, None);
}

proptest! {
    #[test]
    fn prop_digits_concatenate(digits in "[1-9][0-9]{0,14}") {
        let mut engine = CalculatorEngine::new();
        let snapshot = press(&mut engine, &digits);
        prop_assert_eq!(snapshot.display, digits);
    }

    #[test]
    fn prop_leading_zeros_collapse(zeros in 1usize..6, digits in "[1-9][0-9]{0,8}") {
        let mut engine = CalculatorEngine::new();
        let keys = format!("{}{}", "0".repeat(zeros), digits);
        let snapshot = press(&mut engine, &keys);
        prop_assert_eq!(snapshot.display, digits);
    }

    #[test]
    fn prop_sign_toggle_round_trip(digits in "[0-9]{1,10}", fraction in proptest::option::of("[0-9]{1,5}")) {
        let mut engine = CalculatorEngine::new();
        let keys = match &fraction {
            Some(f) => format!("{digits}.{f}"),
            None => digits.clone(),
        };
        press(&mut engine, &keys);
        let before = engine.state().display_value();
        engine.dispatch(Intent::ToggleSign);
        let after = engine.dispatch(Intent::ToggleSign);
        prop_assert_eq!(zcalc::calculator::parse_number(&after.display), before);
    }

    #[test]
    fn prop_history_never_exceeds_limit(count in 0usize..30) {
        let mut engine = CalculatorEngine::new();
        for _ in 0..count {
            press(&mut engine, "1+1=");
        }
        prop_assert_eq!(engine.history().len(), count.min(HISTORY_LIMIT));
    }

    #[test]
    fn prop_binary_results_match_calculate(a in 0u32..10_000, b in 1u32..10_000, symbol in proptest::sample::select(vec!['+', '-', '×', '÷', '%'])) {
        let mut engine = CalculatorEngine::new();
        let snapshot = press(&mut engine, &format!("{a}{symbol}{b}="));
        let operator = Operator::try_from(symbol).unwrap();
        let expected = zcalc::calculator::number_to_text(operator.apply(a as f64, b as f64));
        prop_assert_eq!(snapshot.display, expected);
    }
}
