//! TUI rendering for Stadia using ratatui.
//!
//! Layout, top to bottom: scrolling history pane, the display, the
//! calibration-constant row, and a key-hint bar. A pending error
//! notification is rendered as a modal overlay that blocks input until
//! dismissed.

mod input;
mod theme;

pub use input::{apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use stadia_engine::App;
use stadia_types::EngineMode;

/// Presets per keypad row.
const PRESETS_PER_ROW: usize = 4;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = palette(app.options());
    let glyphs = glyphs(app.options());

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let preset_height = preset_rows(app.presets().len()) + 2;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(3),                  // History
            Constraint::Length(3),               // Display
            Constraint::Length(preset_height),   // Presets
            Constraint::Length(1),               // Key hints
        ])
        .split(frame.area());

    draw_history(frame, app, chunks[0], &palette, &glyphs);
    draw_display(frame, app, chunks[1], &palette);
    draw_presets(frame, app, chunks[2], &palette, &glyphs);
    draw_key_hints(frame, chunks[3], &palette, &glyphs);

    if let Some(message) = app.alert() {
        draw_alert(frame, message, &palette);
    }
}

fn preset_rows(count: usize) -> u16 {
    count.div_ceil(PRESETS_PER_ROW).max(1) as u16
}

fn draw_history(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut title = vec![Span::styled(
        " History ",
        Style::default().fg(palette.text_muted),
    )];
    let above = app.history_entries_above();
    if above > 0 {
        title.push(Span::styled(
            format!("{} {above} more ", glyphs.arrow_up),
            Style::default().fg(palette.text_muted),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .padding(Padding::horizontal(1))
        .title(Line::from(title));

    let lines: Vec<Line> = app
        .visible_history()
        .iter()
        .map(|entry| {
            let style = if entry.starts_with("Error:") {
                Style::default().fg(palette.error)
            } else if entry.starts_with("constant ") {
                Style::default().fg(palette.accent)
            } else {
                Style::default().fg(palette.text_secondary)
            };
            Line::from(Span::styled(entry.as_str(), style))
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn draw_display(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let value_style = match app.mode() {
        EngineMode::Ready => styles::display_value(palette),
        EngineMode::Error => styles::display_error(palette),
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary))
        .padding(Padding::horizontal(1));

    if let Some(pending) = app.pending_operation() {
        block = block.title(Line::from(Span::styled(
            format!(" {} {} ", pending.first(), pending.operator()),
            styles::pending_indicator(palette),
        )));
    }

    let inner_width = area.width.saturating_sub(4) as usize;
    let value = fit_right(app.display(), inner_width);

    let paragraph = Paragraph::new(Line::from(Span::styled(value, value_style)))
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn draw_presets(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.text_muted))
        .title(Span::styled(
            " Constants ",
            Style::default().fg(palette.text_muted),
        ));

    let cell_width = app
        .presets()
        .iter()
        .map(|p| p.label().width())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<Line> = Vec::new();
    for (row, presets) in app.presets().chunks(PRESETS_PER_ROW).enumerate() {
        let mut spans = Vec::new();
        for (col, preset) in presets.iter().enumerate() {
            let index = row * PRESETS_PER_ROW + col;
            let selected = index == app.preset_cursor();
            let marker = if selected { glyphs.selected } else { " " };
            let label = format!("{marker}{:<cell_width$} ", preset.label());
            let style = if selected {
                styles::preset_selected(palette)
            } else {
                Style::default().fg(palette.text_secondary)
            };
            spans.push(Span::styled(label, style));
        }
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_key_hints(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hint = styles::key_hint(palette);
    let key = styles::key_highlight(palette);
    let sep = Span::styled(format!(" {} ", glyphs.bullet), hint);

    let spans = vec![
        Span::styled("0-9.", key),
        Span::styled(" enter", hint),
        sep.clone(),
        Span::styled("+-*/", key),
        Span::styled(" ops", hint),
        sep.clone(),
        Span::styled("=", key),
        Span::styled(" equals", hint),
        sep.clone(),
        Span::styled(glyphs.backspace, key),
        sep.clone(),
        Span::styled("c", key),
        Span::styled(" clear", hint),
        sep.clone(),
        Span::styled("z x", key),
        Span::styled(" 0.0 0.00", hint),
        sep.clone(),
        Span::styled(glyphs.arrows_lr, key),
        Span::styled(" space", key),
        Span::styled(" constant", hint),
        sep.clone(),
        Span::styled(format!("{}{}", glyphs.arrow_up, glyphs.arrow_down), key),
        Span::styled(" history", hint),
        sep,
        Span::styled("q", key),
        Span::styled(" quit", hint),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_alert(frame: &mut Frame, message: &str, palette: &Palette) {
    let area = popup_area(frame.area(), 46, 5);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.error))
        .style(Style::default().bg(palette.bg_popup))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            " Error ",
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ));

    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(palette.text_primary),
        )),
        Line::from(Span::styled(
            "press any key to dismiss",
            Style::default().fg(palette.text_muted),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Centered popup rect of at most `width` x `height`, clamped to `area`.
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// The tail of `value` that fits in `width` terminal columns.
///
/// The display grows at the right edge, so when the value overflows we
/// keep the least significant characters visible.
fn fit_right(value: &str, width: usize) -> &str {
    let mut start = 0;
    while value[start..].width() > width {
        let Some((offset, _)) = value[start..].char_indices().nth(1) else {
            break;
        };
        start += offset;
    }
    &value[start..]
}
