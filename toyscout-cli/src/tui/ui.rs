//! UI rendering using ratatui

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use toyscout_core::InfoTab;

use super::app::{App, Mode};

/// Primary accent color
const ACCENT: Color = Color::Cyan;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for the active tab
const HIGHLIGHT: Color = Color::Yellow;
/// Error color for the status line
const ERROR: Color = Color::Red;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(8),    // Result card
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_input(frame, app, chunks[0]);
    render_card(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);
}

/// Render the query input field
fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.mode == Mode::Input;

    let title = if app.session.is_loading() {
        format!(" Toy Search {} ", app.spinner_char())
    } else {
        " Toy Search ".to_string()
    };

    let border_style = if is_focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    };

    let block = Block::default()
        .title(title)
        .title_style(if is_focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SECONDARY)
        })
        .borders(Borders::ALL)
        .border_style(border_style);

    let content = if is_focused {
        // Show cursor position while typing
        let before = &app.query_input[..app.input_cursor];
        let after = &app.query_input[app.input_cursor..];
        format!("{}|{}", before, after)
    } else {
        app.query_input.clone()
    };

    let content = if content.is_empty() {
        Line::from(Span::styled(
            "Enter toy name or description",
            Style::default().fg(DIM),
        ))
    } else {
        Line::from(content)
    };

    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Render the result card with its four tabs
fn render_card(frame: &mut Frame, app: &App, area: Rect) {
    let Some((query, info)) = app.session.displayed() else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            "Type a toy name and press Enter to search",
            Style::default().fg(DIM),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SECONDARY)),
        );
        frame.render_widget(placeholder, area);
        return;
    };

    let is_focused = app.mode == Mode::Browse;
    let border_style = if is_focused {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(SECONDARY)
    };

    let block = Block::default()
        .title(format!(" {} ", query))
        .title_style(if is_focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SECONDARY)
        })
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let card_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab row
            Constraint::Min(1),    // Tab body
        ])
        .split(inner);

    let titles: Vec<&str> = InfoTab::ALL.iter().map(|tab| tab.label()).collect();
    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, card_chunks[0]);

    // Field text rendered verbatim
    let body = Paragraph::new(info.field(app.active_tab))
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));
    frame.render_widget(body, card_chunks[1]);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode {
        Mode::Input => Span::styled(" INPUT ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::Browse => Span::styled(" BROWSE ", Style::default().bg(HIGHLIGHT).fg(Color::Black)),
    };

    let help_text = match app.mode {
        Mode::Input => "Enter:search  Esc:browse tabs  Ctrl+C:quit",
        Mode::Browse => "Tab/←/→:tabs  1-4:jump  i:edit query  q:quit",
    };

    // Failures are visible here while the previous card stays up
    let status = if let Some(reason) = app.session.error() {
        Span::styled(format!("search failed: {}", reason), Style::default().fg(ERROR))
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help_text, Style::default().fg(DIM)),
        Span::raw(" "),
        status,
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
