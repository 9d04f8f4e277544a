//! Tui command handler

use std::io::{self, Stdout};

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pocket_calc::tui::{run, CalculatorApp};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, warn};

use crate::config::CliConfig;
use crate::error::CliResult;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Execute the tui command. Returns the display shown when the user quit.
pub fn execute_tui(config: &CliConfig) -> CliResult<String> {
    let mut app = CalculatorApp::with_settings(config.settings.clone());

    enable_raw_mode()?;
    with_restore(
        setup_terminal,
        |terminal| run(terminal, &mut app),
        restore_terminal,
    )?;

    Ok(app.display())
}

/// Runs `setup` then `body`, calling `restore` afterwards whichever of them
/// failed. The first error wins.
fn with_restore<S, T>(
    setup: impl FnOnce() -> io::Result<S>,
    body: impl FnOnce(&mut S) -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = setup().and_then(|mut state| body(&mut state));
    let restored = restore();
    if let (Err(_), Err(e)) = (&result, &restored) {
        warn!(error = %e, "terminal restore failed");
    }
    let value = result?;
    restored?;
    Ok(value)
}

fn setup_terminal() -> io::Result<CrosstermTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    debug!("terminal ready");
    Ok(terminal)
}

/// Leaves raw mode and the alternate screen. Safe to call after a partial
/// setup.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)?;
    raw
}
