//! formwatch - terminal demo of reactive form features
//!
//! A Ratatui-based TUI with three small features: a debounced currency
//! converter, a shopping cart with a running total, and a registration
//! form whose fields are validated as you type.

mod app;
mod config;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::AppConfig;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long to wait for input before checking for background changes
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "formwatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load().unwrap_or_else(|err| {
        tracing::warn!("Ignoring unreadable config: {err:#}");
        AppConfig::default()
    });
    tracing::info!(
        field_debounce_ms = config.field_debounce().as_millis() as u64,
        converter_debounce_ms = config.converter_debounce().as_millis() as u64,
        "starting"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut dirty = true;
    loop {
        let stale = app.take_background_changes();
        if dirty || stale {
            terminal.draw(|frame| ui::draw(frame, app))?;
            dirty = false;
        }

        // Polling blocks this thread; the debounce tasks keep running on the
        // other runtime workers.
        let event = tokio::task::block_in_place(|| -> io::Result<Option<Event>> {
            if event::poll(POLL_INTERVAL)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })?;

        match event {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                app.handle_key(key);
                dirty = true;
            }
            Some(Event::Resize(..)) => dirty = true,
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
