//! Perfil TUI - fill in a profile and export it as a PDF declaration
//!
//! A Ratatui-based form that collects name, contacts, address and birth
//! date, then writes a one-page declaration to `perfil_dados.pdf`.

mod app;
mod config;
mod error;
mod export;
mod logging;
mod platform;
mod profile;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::ProfileConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init();

    let (config, config_error) = match ProfileConfig::load() {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            (ProfileConfig::default(), Some(err))
        }
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(&config);
    if let Some(err) = config_error {
        app.push_error(format!("Configuração inválida, usando padrões: {err}"));
    }
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
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
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    app.handle_key(key);
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse(mouse, Rect::new(0, 0, size.width, size.height));
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
