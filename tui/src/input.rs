//! Input handling for the Stadia TUI.
//!
//! Terminal events are serialized by the host event loop and applied to
//! the app strictly in arrival order. Every handler is synchronous; the
//! keyboard map mirrors a desktop calculator keypad (digits, point,
//! operators, equals/Enter, backspace, `c` for clear) plus navigation keys
//! for the preset row and the history pane.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use stadia_engine::App;
use stadia_types::Operator;

/// How long to wait for input before handing the frame back.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50);
/// Upper bound on events applied per frame; never starve rendering.
const MAX_EVENTS_PER_FRAME: usize = 64;

/// Fixed-decimal keypad literals (the `0.0` / `0.00` keys).
const FIXED_DECIMAL_SHORT: &str = "0.0";
const FIXED_DECIMAL_LONG: &str = "0.00";

/// Poll for pending terminal events and apply them to the app.
///
/// Blocks for at most the poll timeout when the queue is empty. Returns
/// `true` when the user asked to quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    if !event::poll(INPUT_POLL_TIMEOUT)? {
        return Ok(app.should_quit());
    }
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        apply_event(app, &event::read()?);
        processed += 1;
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(app.should_quit())
}

/// Apply one terminal event. Public for the benefit of tests.
pub fn apply_event(app: &mut App, event: &Event) {
    let Event::Key(key) = event else { return };
    // Handle press + repeat events (ignore releases)
    if matches!(key.kind, KeyEventKind::Release) {
        return;
    }

    // Ctrl+C quits from any state, including the error notification.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.request_quit();
        return;
    }

    // A pending error notification blocks all other input until dismissed.
    if app.alert().is_some() {
        debug!("alert dismissed");
        app.dismiss_alert();
        return;
    }

    handle_key(app, *key);
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => handle_char(app, c),
        KeyCode::Enter => app.press_equals(),
        KeyCode::Backspace => app.press_backspace(),
        KeyCode::Esc => app.request_quit(),
        KeyCode::Left => app.select_prev_preset(),
        KeyCode::Right => app.select_next_preset(),
        KeyCode::Up | KeyCode::PageUp => app.scroll_history_older(),
        KeyCode::Down | KeyCode::PageDown => app.scroll_history_newer(),
        _ => {}
    }
}

fn handle_char(app: &mut App, c: char) {
    if let Some(digit) = c.to_digit(10) {
        app.press_digit(digit as u8);
        return;
    }
    if let Some(op) = Operator::parse(c) {
        app.press_operator(op);
        return;
    }
    match c {
        '.' => app.press_decimal_point(),
        '=' => app.press_equals(),
        ' ' => app.press_selected_preset(),
        'z' | 'Z' => app.press_fixed_decimal(FIXED_DECIMAL_SHORT),
        'x' | 'X' => app.press_fixed_decimal(FIXED_DECIMAL_LONG),
        'c' | 'C' => app.clear(),
        'q' | 'Q' => app.request_quit(),
        _ => {}
    }
}
