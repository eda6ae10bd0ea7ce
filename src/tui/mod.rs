//! Live terminal dashboard.
//!
//! Feature-gated behind `tui` (on by default).

mod controls;
mod layout;
/// Application state and tick timer.
pub mod runtime;
mod style;

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use crate::config::DashConfig;
use crate::error::Result;
use runtime::App;

/// Opens the dashboard and runs until the user quits.
///
/// Sets up the terminal (raw mode, alternate screen), runs the event loop,
/// and restores the terminal on exit, including when the loop fails.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run(cfg: &DashConfig) -> Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(t) => t,
        Err(e) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            return Err(e.into());
        }
    };

    let mut app = App::new(cfg);
    info!(
        interval_ms = cfg.simulation.tick_interval_ms,
        seed = cfg.simulation.seed,
        "dashboard opened"
    );
    let result = event_loop(&mut terminal, &mut app);
    app.shutdown();

    // Teardown: always restore terminal state
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if let Err(e) = &result {
        warn!(error = %e, "dashboard loop failed");
    }
    result.map_err(Into::into)
}

/// Core event loop: draw, poll input until the next tick is due, tick.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| layout::render(frame, app))?;

        if app.quit {
            return Ok(());
        }

        if event::poll(app.until_next_tick(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                controls::handle_key(app, key);
            }
        }

        app.tick_if_due(Instant::now());
    }
}
