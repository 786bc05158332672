//! Application state: the engine plus everything the UI needs around it.

use stadia_types::{EngineMode, Operator, PresetConstant, UiOptions};

use crate::config::StadiaConfig;
use crate::presets::default_presets;
use crate::{Engine, PendingOperation};

/// Presentation state owned by the app but meaningless to the engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct ViewState {
    /// Entries scrolled back from the newest history entry.
    history_scroll: usize,
    /// Index of the highlighted preset on the keypad row.
    preset_cursor: usize,
}

/// Top-level application state.
///
/// Composes the [`Engine`] with the resolved preset table, UI options, and
/// view state. Every input handler goes through here so the view can react
/// to engine mutations (e.g. snapping the history pane to the newest
/// entry).
#[derive(Debug)]
pub struct App {
    engine: Engine,
    presets: Vec<PresetConstant>,
    options: UiOptions,
    history_window: usize,
    view: ViewState,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Option<&StadiaConfig>) -> Self {
        let presets = config.map_or_else(default_presets, StadiaConfig::resolve_presets);
        let options = config.map(StadiaConfig::ui_options).unwrap_or_default();
        let history_window = config.map_or(crate::DEFAULT_HISTORY_WINDOW, |c| c.history_window());
        Self {
            engine: Engine::new(),
            presets,
            options,
            history_window,
            view: ViewState::default(),
            should_quit: false,
        }
    }

    // ------------------------------------------------------------------
    // Read side
    // ------------------------------------------------------------------

    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    #[must_use]
    pub fn mode(&self) -> EngineMode {
        self.engine.mode()
    }

    #[must_use]
    pub fn pending_operation(&self) -> Option<PendingOperation> {
        self.engine.pending_operation()
    }

    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.engine.alert()
    }

    /// The slice of history currently visible in the pane: a window of
    /// `history_window` entries ending `history_scroll` entries before the
    /// newest, oldest first.
    #[must_use]
    pub fn visible_history(&self) -> &[String] {
        let entries = self.engine.history().entries();
        let end = entries.len().saturating_sub(self.view.history_scroll);
        let start = end.saturating_sub(self.history_window);
        &entries[start..end]
    }

    /// Number of older entries hidden above the visible window.
    #[must_use]
    pub fn history_entries_above(&self) -> usize {
        let entries = self.engine.history().len();
        entries
            .saturating_sub(self.view.history_scroll)
            .saturating_sub(self.history_window)
    }

    #[must_use]
    pub fn history_scroll(&self) -> usize {
        self.view.history_scroll
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.engine.history().len()
    }

    #[must_use]
    pub fn presets(&self) -> &[PresetConstant] {
        &self.presets
    }

    #[must_use]
    pub fn preset_cursor(&self) -> usize {
        self.view.preset_cursor
    }

    #[must_use]
    pub const fn options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    // ------------------------------------------------------------------
    // Input handlers
    // ------------------------------------------------------------------

    pub fn press_digit(&mut self, digit: u8) {
        self.engine.press_digit(digit);
        self.snap_history();
    }

    pub fn press_decimal_point(&mut self) {
        self.engine.press_decimal_point();
        self.snap_history();
    }

    pub fn press_operator(&mut self, op: Operator) {
        self.engine.press_operator(op);
        self.snap_history();
    }

    pub fn press_equals(&mut self) {
        self.engine.press_equals();
        self.snap_history();
    }

    pub fn press_backspace(&mut self) {
        self.engine.press_backspace();
        self.snap_history();
    }

    pub fn press_fixed_decimal(&mut self, literal: &str) {
        self.engine.press_fixed_decimal(literal);
        self.snap_history();
    }

    /// Enter the preset under the keypad cursor.
    pub fn press_selected_preset(&mut self) {
        let Some(preset) = self.presets.get(self.view.preset_cursor).cloned() else {
            return;
        };
        self.engine.press_preset(&preset);
        self.snap_history();
    }

    pub fn clear(&mut self) {
        self.engine.clear();
        self.view.history_scroll = 0;
    }

    pub fn dismiss_alert(&mut self) {
        self.engine.dismiss_alert();
    }

    // ------------------------------------------------------------------
    // View navigation
    // ------------------------------------------------------------------

    pub fn select_next_preset(&mut self) {
        if self.presets.is_empty() {
            return;
        }
        self.view.preset_cursor = (self.view.preset_cursor + 1) % self.presets.len();
    }

    pub fn select_prev_preset(&mut self) {
        if self.presets.is_empty() {
            return;
        }
        self.view.preset_cursor = self
            .view
            .preset_cursor
            .checked_sub(1)
            .unwrap_or(self.presets.len() - 1);
    }

    pub fn scroll_history_older(&mut self) {
        let max = self
            .engine
            .history()
            .len()
            .saturating_sub(self.history_window);
        self.view.history_scroll = (self.view.history_scroll + 1).min(max);
    }

    pub fn scroll_history_newer(&mut self) {
        self.view.history_scroll = self.view.history_scroll.saturating_sub(1);
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Any engine mutation snaps the pane back to the newest entry.
    fn snap_history(&mut self) {
        self.view.history_scroll = 0;
    }
}
