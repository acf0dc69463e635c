//! Event handling for the TUI

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the application
    Quit,
    /// Issue a search for the given query
    Submit(String),
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    match app.mode {
        Mode::Input => handle_input_mode(app, key),
        Mode::Browse => handle_browse_mode(app, key),
    }
}

/// Handle keys while typing in the query field
fn handle_input_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Enter => {
            // Blank queries and submits while a request is in flight
            // are ignored without feedback (the disabled submit control)
            if app.session.is_loading() || app.query_input.trim().is_empty() {
                HandleResult::Continue
            } else {
                HandleResult::Submit(app.query_input.clone())
            }
        }
        KeyCode::Esc | KeyCode::Tab => {
            if app.session.displayed().is_some() {
                app.enter_browse();
            }
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            app.input_backspace();
            HandleResult::Continue
        }
        KeyCode::Left => {
            app.cursor_left();
            HandleResult::Continue
        }
        KeyCode::Right => {
            app.cursor_right();
            HandleResult::Continue
        }
        KeyCode::Home => {
            app.input_cursor = 0;
            HandleResult::Continue
        }
        KeyCode::End => {
            app.input_cursor = app.query_input.len();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            app.input_insert(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

/// Handle keys while browsing the result card
fn handle_browse_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Char('q') => HandleResult::Quit,

        // Back to the query field
        KeyCode::Esc | KeyCode::Char('i') | KeyCode::Char('/') => {
            app.enter_input();
            HandleResult::Continue
        }

        // Tab cycling
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
            app.next_tab();
            HandleResult::Continue
        }
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
            app.prev_tab();
            HandleResult::Continue
        }

        // Direct tab selection
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c.to_digit(10).unwrap() as usize - 1;
            app.select_tab(idx);
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyscout_core::{InfoTab, ToyInfo};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_info() -> ToyInfo {
        ToyInfo {
            description: "A red ball".to_string(),
            price_comparison: "$5-$10".to_string(),
            developmental_benefits: "Hand-eye coordination".to_string(),
            reviews: "4.5 stars".to_string(),
        }
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut app = App::new();
        assert!(matches!(
            handle_key(&mut app, key(KeyCode::Enter)),
            HandleResult::Continue
        ));

        for c in "   ".chars() {
            app.input_insert(c);
        }
        assert!(matches!(
            handle_key(&mut app, key(KeyCode::Enter)),
            HandleResult::Continue
        ));
        assert!(!app.session.is_loading());
    }

    #[test]
    fn test_submit_returns_query() {
        let mut app = App::new();
        for c in "red ball".chars() {
            app.input_insert(c);
        }
        match handle_key(&mut app, key(KeyCode::Enter)) {
            HandleResult::Submit(query) => assert_eq!(query, "red ball"),
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_submit_while_loading_is_ignored() {
        let mut app = App::new();
        app.session.submit("red ball");
        for c in "blue ball".chars() {
            app.input_insert(c);
        }
        assert!(matches!(
            handle_key(&mut app, key(KeyCode::Enter)),
            HandleResult::Continue
        ));
    }

    #[test]
    fn test_esc_enters_browse_only_with_result() {
        let mut app = App::new();
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Input);

        app.session.submit("red ball");
        app.session.resolve("red ball", sample_info());
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Browse);
    }

    #[test]
    fn test_browse_tab_keys() {
        let mut app = App::new();
        app.session.submit("red ball");
        app.session.resolve("red ball", sample_info());
        app.enter_browse();

        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.active_tab, InfoTab::Price);
        handle_key(&mut app, key(KeyCode::Char('4')));
        assert_eq!(app.active_tab, InfoTab::Reviews);
        handle_key(&mut app, key(KeyCode::Left));
        assert_eq!(app.active_tab, InfoTab::Benefits);
    }

    #[test]
    fn test_browse_quit() {
        let mut app = App::new();
        app.enter_browse();
        assert!(matches!(
            handle_key(&mut app, key(KeyCode::Char('q'))),
            HandleResult::Quit
        ));
    }

    #[test]
    fn test_typing_q_in_input_mode_does_not_quit() {
        let mut app = App::new();
        assert!(matches!(
            handle_key(&mut app, key(KeyCode::Char('q'))),
            HandleResult::Continue
        ));
        assert_eq!(app.query_input, "q");
    }
}
