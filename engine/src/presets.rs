//! Built-in calibration constant table.
//!
//! Rod-factor corrections for the measurement workflow. The label carries
//! the factor notation as printed on the instrument card; the value is the
//! correction term entered into the display. The table can be replaced
//! wholesale from the config file.

use rust_decimal::Decimal;

use stadia_types::PresetConstant;

/// Stock constants as (label, mantissa, scale).
const STOCK_TABLE: &[(&str, i64, u32)] = &[
    ("0.67x-0.0556", 556, 4),
    ("0.8x-0.0471", 471, 4),
    ("1x-0.0378", 378, 4),
    ("1.2x-0.0310", 310, 4),
    ("1.5x-0.0250", 250, 4),
    ("2x-0.0185", 185, 4),
    ("2.5x-0.0152", 152, 4),
    ("3x-0.0126", 126, 4),
    ("3.5x-0.0109", 109, 4),
    ("4x-0.0095", 95, 4),
    ("4.5x-0.0083", 83, 4),
];

/// The stock calibration constants, in keypad order.
#[must_use]
pub fn default_presets() -> Vec<PresetConstant> {
    STOCK_TABLE
        .iter()
        .map(|&(label, num, scale)| PresetConstant::new(label, Decimal::new(num, scale)))
        .collect()
}
