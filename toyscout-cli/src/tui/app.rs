//! Core application state and mode management

use toyscout_core::{InfoTab, SearchSession};

/// Spinner animation frames, advanced on each poll tick while loading
const SPINNER_FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Input mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Typing in the query field
    #[default]
    Input,
    /// Navigating the result card tabs
    Browse,
}

/// Main application state
#[derive(Debug, Default)]
pub struct App {
    /// Current input mode
    pub mode: Mode,
    /// Query field content
    pub query_input: String,
    /// Query field cursor position (byte offset)
    pub input_cursor: usize,
    /// Search lifecycle state
    pub session: SearchSession,
    /// Active tab on the result card
    pub active_tab: InfoTab,
    /// Spinner frame index
    pub spinner_frame: usize,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to browse mode (only useful once a card exists)
    pub fn enter_browse(&mut self) {
        self.mode = Mode::Browse;
    }

    /// Switch back to the query field
    pub fn enter_input(&mut self) {
        self.mode = Mode::Input;
    }

    /// Insert a char at the cursor
    pub fn input_insert(&mut self, c: char) {
        self.query_input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    /// Delete the char before the cursor
    pub fn input_backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev = prev_char_boundary(&self.query_input, self.input_cursor);
            self.query_input.remove(prev);
            self.input_cursor = prev;
        }
    }

    /// Move the cursor one char left
    pub fn cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = prev_char_boundary(&self.query_input, self.input_cursor);
        }
    }

    /// Move the cursor one char right
    pub fn cursor_right(&mut self) {
        if self.input_cursor < self.query_input.len() {
            self.input_cursor = next_char_boundary(&self.query_input, self.input_cursor);
        }
    }

    /// Select the next tab, wrapping
    pub fn next_tab(&mut self) {
        self.active_tab = self.active_tab.next();
    }

    /// Select the previous tab, wrapping
    pub fn prev_tab(&mut self) {
        self.active_tab = self.active_tab.prev();
    }

    /// Select a tab by display position
    pub fn select_tab(&mut self, index: usize) {
        if let Some(tab) = InfoTab::ALL.get(index) {
            self.active_tab = *tab;
        }
    }

    /// Advance the spinner animation
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    /// Current spinner frame char
    pub fn spinner_char(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }
}

fn prev_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
