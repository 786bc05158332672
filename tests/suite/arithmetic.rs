//! Properties of the pure arithmetic layer.

use rust_decimal::Decimal;
use stadia_engine::apply;
use stadia_types::{CalcError, Operator};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn apply_matches_standard_decimal_arithmetic() {
    let cases = [
        ("3", Operator::Add, "4", "7"),
        ("0.1", Operator::Add, "0.2", "0.3"),
        ("10", Operator::Sub, "12.5", "-2.5"),
        ("7", Operator::Mul, "3", "21"),
        ("0.0556", Operator::Mul, "100", "5.56"),
        ("1", Operator::Div, "8", "0.125"),
    ];
    for (a, op, b, expected) in cases {
        assert_eq!(
            apply(dec(a), op, dec(b)),
            Ok(dec(expected)),
            "{a} {op} {b}"
        );
    }
}

#[test]
fn results_are_reduced_to_ten_significant_digits() {
    assert_eq!(apply(dec("1"), Operator::Div, dec("3")), Ok(dec("0.3333333333")));
    assert_eq!(apply(dec("2"), Operator::Div, dec("3")), Ok(dec("0.6666666667")));
    assert_eq!(
        apply(dec("1"), Operator::Div, dec("7")),
        Ok(dec("0.1428571429"))
    );
}

#[test]
fn division_by_zero_never_returns_a_numeric_result() {
    for a in ["0", "1", "-3.5", "0.0001"] {
        assert_eq!(
            apply(dec(a), Operator::Div, Decimal::ZERO),
            Err(CalcError::DivisionByZero),
            "{a} / 0"
        );
    }
}

#[test]
fn zero_dividend_is_fine_when_divisor_is_nonzero() {
    assert_eq!(apply(Decimal::ZERO, Operator::Div, dec("4")), Ok(Decimal::ZERO));
}
