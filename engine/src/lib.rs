//! Calculator engine for Stadia - state machine and decimal arithmetic.
//!
//! This crate contains the engine and application state without TUI
//! dependencies. The engine consumes discrete input events (digit, decimal
//! point, operator, equals, clear, backspace, preset constant) and produces
//! an updated display value plus history-log mutations. All processing is
//! synchronous and single-threaded; events arrive strictly in order from
//! the host event loop.

mod app;
mod calc;
mod config;
mod presets;

pub use app::{App, ViewState};
pub use calc::{WORKING_PRECISION, apply, parse_value};
pub use config::{AppConfig, ConfigError, DEFAULT_HISTORY_WINDOW, PresetEntry, StadiaConfig};
pub use presets::default_presets;

// Re-export the domain vocabulary so callers depend on one crate
pub use rust_decimal::Decimal;
pub use stadia_types::{CalcError, EngineMode, HistoryLog, Operator, PresetConstant, UiOptions};

/// Display value shown while the engine is in its error state.
pub const ERROR_SENTINEL: &str = "Error";

/// An operator chosen but not yet applied, awaiting its second operand.
///
/// Holding operand and operator in one slot makes the pairing invariant
/// structural: neither can be set without the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOperation {
    first: Decimal,
    op: Operator,
}

impl PendingOperation {
    #[must_use]
    pub const fn first(&self) -> Decimal {
        self.first
    }

    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.op
    }
}

/// The calculator engine.
///
/// Exactly one exists per running session and it owns all transient state:
/// the display value, the pending-operation slot, the awaiting-new-entry
/// flag, the Ready/Error mode, and the history log.
#[derive(Debug)]
pub struct Engine {
    display: String,
    pending: Option<PendingOperation>,
    awaiting_new_entry: bool,
    mode: EngineMode,
    history: HistoryLog,
    alert: Option<String>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            awaiting_new_entry: true,
            mode: EngineMode::Ready,
            history: HistoryLog::new(),
            alert: None,
        }
    }

    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[must_use]
    pub const fn mode(&self) -> EngineMode {
        self.mode
    }

    #[must_use]
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[must_use]
    pub const fn pending_operation(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Error message awaiting acknowledgement by the user, if any.
    ///
    /// While this is set, the host UI shows a blocking notification and
    /// feeds no other input to the engine.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Acknowledge the pending error notification.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Enter a digit (0-9).
    ///
    /// In the error state this dismisses the error and starts a fresh
    /// entry. Otherwise the digit either starts a new number (when the
    /// previous operation finished) or extends the current one.
    pub fn press_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        if digit > 9 {
            return;
        }
        let digit = char::from(b'0' + digit);
        if self.mode.is_error() {
            self.mode = EngineMode::Ready;
            self.display = digit.to_string();
            self.awaiting_new_entry = false;
            return;
        }
        if self.awaiting_new_entry {
            self.display = digit.to_string();
            self.awaiting_new_entry = false;
        } else {
            self.display.push(digit);
        }
    }

    /// Enter the decimal point.
    ///
    /// No-op when the display already contains one. In the error state
    /// this dismisses the error and starts `0.`.
    pub fn press_decimal_point(&mut self) {
        if self.mode.is_error() {
            self.mode = EngineMode::Ready;
            self.display = "0.".to_string();
            self.awaiting_new_entry = false;
            return;
        }
        if !self.display.contains('.') {
            self.display.push('.');
            self.awaiting_new_entry = false;
        }
    }

    /// Choose an operator.
    ///
    /// The first operator press latches the current value and the
    /// operator. A later press with an operation already pending applies
    /// it first (left-to-right, no precedence) and latches the result.
    pub fn press_operator(&mut self, op: Operator) {
        if self.mode.is_error() {
            return;
        }
        let current = match calc::parse_value(&self.display) {
            Ok(value) => value,
            Err(err) => {
                self.fail(&err);
                return;
            }
        };
        match self.pending {
            None => {
                self.pending = Some(PendingOperation { first: current, op });
                self.history.push(format!("{current} {op} "));
            }
            Some(PendingOperation {
                first,
                op: pending_op,
            }) => match calc::apply(first, pending_op, current) {
                Ok(result) => {
                    self.display = result.to_string();
                    self.history.amend_last(&format!("{current} = {result}"));
                    self.history.push(format!("{result} {op} "));
                    self.pending = Some(PendingOperation { first: result, op });
                }
                Err(err) => {
                    // Abort without touching the pending slot.
                    self.fail(&err);
                    return;
                }
            },
        }
        self.awaiting_new_entry = true;
    }

    /// Apply the pending operation. No-op when none is pending.
    pub fn press_equals(&mut self) {
        if self.mode.is_error() {
            return;
        }
        let Some(PendingOperation { first, op }) = self.pending else {
            return;
        };
        let second = match calc::parse_value(&self.display) {
            Ok(value) => value,
            Err(err) => {
                self.fail(&err);
                return;
            }
        };
        match calc::apply(first, op, second) {
            Ok(result) => {
                self.history.amend_last(&format!("{second} = {result}"));
                self.display = result.to_string();
                self.pending = None;
                self.awaiting_new_entry = true;
            }
            Err(err) => self.fail(&err),
        }
    }

    /// Drop the last character of the display; a single-character display
    /// resets to `0`. Idempotent on `0`.
    pub fn press_backspace(&mut self) {
        if self.mode.is_error() {
            return;
        }
        if self.display.len() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
    }

    /// Enter a calibration constant.
    ///
    /// Unconditional: unlike every other entry action this bypasses the
    /// error guard, rewriting the display and thereby dismissing the
    /// error. Intentional asymmetry, kept so a constant can always be
    /// keyed in mid-measurement.
    pub fn press_preset(&mut self, preset: &PresetConstant) {
        let value = preset.value();
        self.mode = EngineMode::Ready;
        self.display = value.to_string();
        self.awaiting_new_entry = false;
        self.history.push(format!("constant {value}"));
    }

    /// Append a fixed-decimal literal (`0.0` or `0.00` on the keypad),
    /// starting a fresh entry when the previous operation finished.
    pub fn press_fixed_decimal(&mut self, literal: &str) {
        if self.mode.is_error() {
            return;
        }
        if self.awaiting_new_entry {
            self.display = literal.to_string();
        } else {
            self.display.push_str(literal);
        }
        self.awaiting_new_entry = false;
    }

    /// Reset everything: pending operation, display, mode, and the entire
    /// history log.
    pub fn clear(&mut self) {
        self.pending = None;
        self.awaiting_new_entry = true;
        self.mode = EngineMode::Ready;
        self.display = "0".to_string();
        self.history.clear();
        self.alert = None;
    }

    fn fail(&mut self, err: &CalcError) {
        tracing::warn!(error = %err, display = %self.display, "calculation failed");
        self.mode = EngineMode::Error;
        self.display = ERROR_SENTINEL.to_string();
        self.history.push(format!("Error: {err}"));
        self.alert = Some(err.to_string());
    }
}
