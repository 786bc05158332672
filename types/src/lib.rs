//! Core domain types for Stadia.
//!
//! This crate contains pure domain types with no IO and no UI dependencies.
//! Everything here can be used from any layer of the application.

mod history;
pub use history::HistoryLog;

use rust_decimal::Decimal;
use thiserror::Error;

// ============================================================================
// Operators
// ============================================================================

/// A binary arithmetic operator.
///
/// This is a closed enum: unrecognized operators are unrepresentable, so
/// every dispatch over operators is checked exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// The display symbol used in the history log and on the keypad.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
            Operator::Div => "÷",
        }
    }

    /// Parse an operator key, accepting both ASCII and typeset forms.
    #[must_use]
    pub const fn parse(key: char) -> Option<Self> {
        match key {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' | '×' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            _ => None,
        }
    }

    /// All operators in keypad order.
    #[must_use]
    pub const fn all() -> &'static [Operator] {
        &[Operator::Add, Operator::Sub, Operator::Mul, Operator::Div]
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Errors
// ============================================================================

/// A failed calculation.
///
/// Every variant maps to the same user-visible behavior: the engine enters
/// its error state, shows the sentinel display value, and records the
/// message in the history log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The second operand of a division was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The display value could not be read as a decimal. Normal input
    /// discipline prevents this, but it is guarded regardless.
    #[error("not a number: {0}")]
    Parse(String),
    /// The result exceeded the representable decimal range.
    #[error("value out of range")]
    Overflow,
}

// ============================================================================
// Engine Mode
// ============================================================================

/// The engine's two-state machine.
///
/// `Ready` -> `Error` on any arithmetic or parse failure. `Error` -> `Ready`
/// on digit entry, decimal point entry, clear, or preset entry. Operator,
/// equals, and backspace presses while in `Error` are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineMode {
    #[default]
    Ready,
    Error,
}

impl EngineMode {
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, EngineMode::Error)
    }
}

// ============================================================================
// Preset Constants
// ============================================================================

/// A calibration constant insertable in one action.
///
/// The label carries the full rod-factor notation (e.g. `1.5x-0.0250`);
/// the value is the correction term entered into the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetConstant {
    label: String,
    value: Decimal,
}

impl PresetConstant {
    #[must_use]
    pub fn new(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }
}

// ============================================================================
// UI Options
// ============================================================================

/// Rendering preferences resolved from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and keypad symbols.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
}

// ============================================================================
// Tests
// ============================================================================
