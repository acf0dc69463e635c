//! Terminal management and main run loop

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::warn;

use toyscout_core::{ScoutConfig, ToyInfo, ToyInfoClient};

use super::app::App;
use super::event::{handle_key, poll_event, HandleResult};
use super::ui;

/// One settled request: the submitted query and its outcome
type Settlement = (String, toyscout_core::Result<ToyInfo>);

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore the terminal to normal mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the TUI application
pub async fn run() -> Result<()> {
    // Resolve config before touching the terminal so a missing key
    // prints a normal error instead of garbling the alternate screen
    let config = ScoutConfig::load()?;
    let api_key = config.require_api_key()?.to_string();
    let client = ToyInfoClient::new(&config.api, api_key);

    let mut terminal = init_terminal()?;
    let mut app = App::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<Settlement>();

    let result = run_loop(&mut terminal, &mut app, &client, &tx, &mut rx).await;

    // Restore terminal (even if loop failed)
    restore_terminal(&mut terminal)?;

    result
}

/// Main event loop
async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &ToyInfoClient,
    tx: &mpsc::UnboundedSender<Settlement>,
    rx: &mut mpsc::UnboundedReceiver<Settlement>,
) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events (with 100ms timeout for responsive UI)
        if let Some(event) = poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => match handle_key(app, key) {
                    HandleResult::Quit => break,
                    HandleResult::Continue => {}
                    HandleResult::Submit(query) => {
                        submit_search(app, client, tx, query);
                    }
                },
                Event::Resize(_, _) => {
                    // Terminal resized, will be handled on next draw
                }
                _ => {}
            }
        }

        // Apply settled requests in arrival order
        drain_settlements(app, rx);

        if app.session.is_loading() {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Start one fetch on a background task
///
/// The event loop never awaits the request itself; completion comes
/// back through the channel and is applied by `drain_settlements`.
fn submit_search(
    app: &mut App,
    client: &ToyInfoClient,
    tx: &mpsc::UnboundedSender<Settlement>,
    query: String,
) {
    if !app.session.submit(&query) {
        return;
    }

    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.fetch_toy_info(&query).await;
        // Receiver is gone only during shutdown
        let _ = tx.send((query, result));
    });
}

/// Drain settled requests without blocking
fn drain_settlements(app: &mut App, rx: &mut mpsc::UnboundedReceiver<Settlement>) {
    while let Ok((query, result)) = rx.try_recv() {
        match result {
            Ok(info) => {
                app.session.resolve(query, info);
                app.enter_browse();
            }
            Err(err) => {
                warn!(error = %err, query = %query, "toy info request failed");
                app.session.fail(query, err.to_string());
            }
        }
    }
}
