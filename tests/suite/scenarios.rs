//! End-to-end keypad scenarios through the application state.

use stadia_engine::App;
use stadia_types::{EngineMode, Operator};

fn press(app: &mut App, keys: &str) {
    for c in keys.chars() {
        if let Some(digit) = c.to_digit(10) {
            app.press_digit(digit as u8);
        } else if let Some(op) = Operator::parse(c) {
            app.press_operator(op);
        } else {
            match c {
                '.' => app.press_decimal_point(),
                '=' => app.press_equals(),
                '<' => app.press_backspace(),
                'c' => app.clear(),
                _ => panic!("unmapped test key: {c}"),
            }
        }
    }
}

#[test]
fn round_trip_addition() {
    let mut app = App::new(None);
    press(&mut app, "3+4=");
    assert_eq!(app.display(), "7");
    assert_eq!(app.visible_history(), ["3 + 4 = 7"]);
}

#[test]
fn chained_operators_have_no_precedence() {
    let mut app = App::new(None);
    press(&mut app, "5+2×3=");
    assert_eq!(app.display(), "21");
    assert_eq!(app.visible_history(), ["5 + 2 = 7", "7 × 3 = 21"]);
}

#[test]
fn decimal_entry_and_arithmetic() {
    let mut app = App::new(None);
    press(&mut app, "12.5-0.25=");
    assert_eq!(app.display(), "12.25");
}

#[test]
fn error_recovery_with_digit_entry() {
    let mut app = App::new(None);
    press(&mut app, "9÷0=");
    assert_eq!(app.mode(), EngineMode::Error);
    assert_eq!(app.display(), "Error");
    assert!(app.alert().is_some());

    app.dismiss_alert();
    press(&mut app, "1");
    assert_eq!(app.mode(), EngineMode::Ready);
    assert_eq!(app.display(), "1");
}

#[test]
fn backspace_is_idempotent_on_zero() {
    let mut app = App::new(None);
    press(&mut app, "<");
    assert_eq!(app.display(), "0");
    press(&mut app, "<<<");
    assert_eq!(app.display(), "0");
}

#[test]
fn clear_wipes_display_history_and_mode() {
    let mut app = App::new(None);
    press(&mut app, "7×0.5=4÷0=");
    assert_eq!(app.mode(), EngineMode::Error);
    press(&mut app, "c");
    assert_eq!(app.display(), "0");
    assert_eq!(app.mode(), EngineMode::Ready);
    assert!(app.visible_history().is_empty());
    assert!(app.alert().is_none());
}

#[test]
fn preset_entry_works_even_in_error_state() {
    let mut app = App::new(None);
    press(&mut app, "1÷0=");
    assert_eq!(app.mode(), EngineMode::Error);

    app.press_selected_preset();
    assert_eq!(app.mode(), EngineMode::Ready);
    assert_eq!(app.display(), "0.0556");
    assert_eq!(
        app.visible_history().last().map(String::as_str),
        Some("constant 0.0556")
    );
}

#[test]
fn preset_cursor_wraps_both_ways() {
    let mut app = App::new(None);
    let count = app.presets().len();
    assert_eq!(app.preset_cursor(), 0);
    app.select_prev_preset();
    assert_eq!(app.preset_cursor(), count - 1);
    app.select_next_preset();
    assert_eq!(app.preset_cursor(), 0);
}

#[test]
fn preset_value_participates_in_arithmetic() {
    let mut app = App::new(None);
    press(&mut app, "10×");
    app.press_selected_preset();
    press(&mut app, "=");
    assert_eq!(app.display(), "0.556");
}

#[test]
fn fixed_decimal_literal_extends_current_entry() {
    let mut app = App::new(None);
    press(&mut app, "5");
    app.press_fixed_decimal("0.00");
    assert_eq!(app.display(), "50.00");
}
