use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use losttrack_core::{Config, ItemStore};
use losttrack_tui::{App, FormField, View, UI};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // The terminal belongs to the TUI, so logs go to a file
    std::fs::create_dir_all(Config::data_dir())?;
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(Config::log_path())
        .context("could not open log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .compact()
        .init();

    // Open the store before touching the terminal so a storage failure is
    // reported as a plain blocking error instead of a garbled screen
    let config = Config::load().context("failed to load configuration")?;
    let store = ItemStore::open(&config.db_path)
        .await
        .with_context(|| format!("failed to open item store at {}", config.db_path.display()))?;

    // Create app state
    let mut app = App::new(store);
    app.refresh_count().await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create UI
    let mut ui = UI::new();

    // Main event loop
    let res = run_event_loop(&mut terminal, &mut app, &mut ui).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ui: &mut UI<'_>,
) -> Result<()> {
    // Track the view so the form's textarea resets when Add is (re)opened
    let mut last_view = app.view;

    loop {
        if app.view != last_view {
            if app.view == View::Add {
                ui.form.clear();
            }
            last_view = app.view;
        }

        // Render UI
        terminal.draw(|f| ui.render(f, app))?;

        // Poll for events with timeout
        if let Some(event) = App::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => {
                    // Submit needs the description text, which lives in the
                    // UI layer's textarea
                    if app.view == View::Add
                        && app.form.scan.is_none()
                        && key.code == KeyCode::Char('s')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        if app.submit_form(&ui.form.content()).await {
                            ui.form.clear();
                        }
                        continue;
                    }

                    // Let the description textarea consume plain editing keys
                    ui.handle_input(key, app);

                    // Then let the app handle the rest
                    let editing_description = app.view == View::Add
                        && app.form.scan.is_none()
                        && app.form.focus == FormField::Description;
                    let should_handle = match key.code {
                        KeyCode::Char(_)
                            if editing_description
                                && !key.modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            false
                        }
                        KeyCode::Backspace | KeyCode::Delete | KeyCode::Enter
                            if editing_description =>
                        {
                            false
                        }
                        _ => true,
                    };

                    if should_handle {
                        app.handle_key_event(key).await?;
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Exit if requested
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
