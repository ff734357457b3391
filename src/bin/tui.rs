//! # Remex TUI
//!
//! Terminal user interface listing reminders from the backend.
//!
//! Usage: `cargo run --features tui --bin remex-tui`

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenvy::dotenv;
use log::{error, info};
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use remex::tui::event::{map_key_event, KeyAction};
use remex::tui::logging;
use remex::tui::{App, Event, EventHandler, Screen};
use remex::{Config, RecordListView, RemoteCollection};

/// TUI refresh rate
const TICK_RATE: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Log to a file; stderr would draw over the alternate screen
    let log_path = logging::log_path_from(|key| std::env::var(key).ok());
    logging::init(&log_path)?;

    info!("Starting Remex TUI...");

    let config = Config::from_env()?;
    let source = RemoteCollection::reminders(&config)?;
    let mut app = App::new(
        RecordListView::reminders(Arc::new(source)),
        config.api_base_url.clone(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventHandler::new(TICK_RATE);

    app.start();
    let result = run_app(&mut terminal, &mut app, &mut events).await;
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("Application error: {}", e);
        return Err(e);
    }

    info!("Remex TUI shutdown complete");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        app.on_tick();

        terminal.draw(|frame| {
            remex::tui::ui::render(frame, app);
        })?;

        match events.next().await {
            Some(Event::Key(key)) => handle_action(app, map_key_event(key)),
            Some(Event::Tick) | Some(Event::Resize(_, _)) => {}
            None => break,
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: KeyAction) {
    match action {
        KeyAction::Quit => app.should_quit = true,
        KeyAction::SwitchScreen(screen) => app.switch_screen(screen),
        KeyAction::Back => app.switch_screen(Screen::Reminders),
        KeyAction::Up => app.select_previous(),
        KeyAction::Down => app.select_next(),
        KeyAction::Home => app.select_first(),
        KeyAction::End => app.select_last(),
        KeyAction::None => {}
    }
}
