//! Pure decimal arithmetic at the fixed working precision.

use rust_decimal::Decimal;

use stadia_types::{CalcError, Operator};

/// Significant digits every arithmetic result is reduced to.
pub const WORKING_PRECISION: u32 = 10;

/// Read a display string as a decimal value.
///
/// A trailing decimal point (a number still being typed, e.g. `"3."`) is
/// accepted and read as the integer part.
pub fn parse_value(display: &str) -> Result<Decimal, CalcError> {
    let trimmed = display.strip_suffix('.').unwrap_or(display);
    trimmed
        .parse::<Decimal>()
        .map_err(|_| CalcError::Parse(display.to_string()))
}

/// Apply `op` to an operand pair, reducing the result to the working
/// precision.
///
/// Division by the decimal value zero is rejected with
/// [`CalcError::DivisionByZero`] and never computed.
pub fn apply(first: Decimal, op: Operator, second: Decimal) -> Result<Decimal, CalcError> {
    let raw = match op {
        Operator::Add => first.checked_add(second),
        Operator::Sub => first.checked_sub(second),
        Operator::Mul => first.checked_mul(second),
        Operator::Div => {
            if second.is_zero() {
                return Err(CalcError::DivisionByZero);
            }
            first.checked_div(second)
        }
    };
    raw.ok_or(CalcError::Overflow).and_then(reduce)
}

/// Reduce a value to [`WORKING_PRECISION`] significant digits and strip
/// trailing zeros, so `3 + 4` renders as `7` rather than `7.000000000`.
fn reduce(value: Decimal) -> Result<Decimal, CalcError> {
    value
        .round_sf(WORKING_PRECISION)
        .map(|v| v.normalize())
        .ok_or(CalcError::Overflow)
}
