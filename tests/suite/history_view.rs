//! History pane behavior: bounded window, scrolling, snap-to-newest.

use stadia_engine::App;
use stadia_types::Operator;

/// Produce `n` history entries of the form `"i + i = 2i"`.
fn fill_history(app: &mut App, n: usize) {
    for i in 1..=n {
        for c in i.to_string().chars() {
            app.press_digit(c as u8 - b'0');
        }
        app.press_operator(Operator::Add);
        for c in i.to_string().chars() {
            app.press_digit(c as u8 - b'0');
        }
        app.press_equals();
    }
}

#[test]
fn visible_history_is_bounded_to_the_window() {
    let mut app = App::new(None);
    fill_history(&mut app, 6);
    assert_eq!(app.history_len(), 6);

    let visible = app.visible_history();
    assert_eq!(visible.len(), 4);
    assert_eq!(visible.first().map(String::as_str), Some("3 + 3 = 6"));
    assert_eq!(visible.last().map(String::as_str), Some("6 + 6 = 12"));
    assert_eq!(app.history_entries_above(), 2);
}

#[test]
fn scrolling_walks_back_and_is_clamped() {
    let mut app = App::new(None);
    fill_history(&mut app, 6);

    app.scroll_history_older();
    assert_eq!(
        app.visible_history().last().map(String::as_str),
        Some("5 + 5 = 10")
    );

    // Clamp: only two entries are hidden above the default window.
    for _ in 0..10 {
        app.scroll_history_older();
    }
    assert_eq!(app.history_scroll(), 2);
    assert_eq!(
        app.visible_history().first().map(String::as_str),
        Some("1 + 1 = 2")
    );

    app.scroll_history_newer();
    app.scroll_history_newer();
    assert_eq!(app.history_scroll(), 0);
    app.scroll_history_newer();
    assert_eq!(app.history_scroll(), 0);
}

#[test]
fn new_input_snaps_the_pane_to_the_newest_entry() {
    let mut app = App::new(None);
    fill_history(&mut app, 6);
    app.scroll_history_older();
    app.scroll_history_older();
    assert_ne!(app.history_scroll(), 0);

    app.press_digit(9);
    assert_eq!(app.history_scroll(), 0);
}

#[test]
fn scrolling_a_short_history_is_a_noop() {
    let mut app = App::new(None);
    fill_history(&mut app, 2);
    app.scroll_history_older();
    assert_eq!(app.history_scroll(), 0);
    assert_eq!(app.visible_history().len(), 2);
}
