//! Terminal lifecycle, event loop, and cleanup for the ModelHub picker TUI.

mod actions;
mod app;
mod events;
mod host;
mod search;
mod services;
mod state;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use app::App;
use events::{key_to_action, mouse_to_action, TICK_RATE};
use host::HostClient;

fn main() -> Result<()> {
    // Initialise structured logging (RUST_LOG controls the filter).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("modelhub_tui=info".parse()?),
        )
        .with_target(false)
        .init();

    let base_url =
        std::env::var("MODELHUB_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".into());

    // Raw mode + alternate screen; mouse capture lives exactly as long as the
    // panel does (released in the teardown below).
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.show_cursor()?;

    let mut app = App::new(HostClient::new(base_url));
    app.bootstrap();

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = terminal.show_cursor();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        if app.should_quit {
            return Ok(());
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(TICK_RATE)? {
            let action = match event::read()? {
                Event::Key(key) => key_to_action(&key, app.state.picker.open),
                Event::Mouse(mouse) => mouse_to_action(
                    &mouse,
                    terminal.get_frame().area(),
                    app.state.picker.open,
                    !app.state.picker.input.is_empty(),
                    app.state.picker.highlighted,
                    app.results().len(),
                ),
                _ => None,
            };
            if let Some(a) = action {
                app.dispatch(a);
            }
        }
    }
}
