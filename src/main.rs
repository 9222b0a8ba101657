//! Qvent TUI - terminal client for Qvent event registration
//!
//! Opens a public event page, collects the registration form, runs the
//! payment step for paid events and submits to the Qvent API.

mod api;
mod app;
mod config;
mod payment;
mod platform;
mod state;
mod ui;

use anyhow::Result;
use api::EventClient;
use app::App;
use clap::Parser;
use config::{ClientConfig, API_BASE_ENV};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use payment::SimulatedGateway;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Terminal client for Qvent event registration
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Route to open, e.g. /event/abc123
    route: Option<String>,
    /// Open the page of this event id (shorthand for /event/<ID>)
    #[arg(long, conflicts_with = "route")]
    event: Option<String>,
    /// Base URL of the Qvent API
    #[arg(long)]
    api_base: Option<String>,
}

impl Args {
    fn route(&self) -> String {
        match (&self.event, &self.route) {
            (Some(id), _) => format!("/event/{id}"),
            (None, Some(route)) => route.clone(),
            (None, None) => "/".to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qvent_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let settings = ClientConfig::load()?.resolve(
        args.api_base.clone(),
        std::env::var(API_BASE_ENV).ok(),
    );
    let client = EventClient::new(&settings.api_base_url)?;
    tracing::info!(api = %client.base_url(), "starting");
    let gateway = SimulatedGateway::new(settings.payment_delay);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Arc::new(client), Arc::new(gateway), settings.redirect_delay);
    app.open(&args.route());
    let result = run_app(&mut terminal, &mut app);

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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Apply finished background work, then timers
        app.drain_events();
        app.tick();

        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key);
            }
        }

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}
