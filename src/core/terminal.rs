/// Terminal setup and teardown around the game loop.
use std::io::stdout;

use anyhow::{Context, Result};
use crossterm::terminal::SetTitle;
use ratatui::DefaultTerminal;
use tracing::{debug, warn};

/// Enter raw mode and the alternate screen. Failure here is fatal for the game.
///
/// On failure the terminal is put back the way it was, since raw mode may
/// already be on when a later setup step fails.
pub fn init(title: &str) -> Result<DefaultTerminal> {
    let terminal = ratatui::try_init()
        .inspect_err(|_| restore())
        .context("failed to initialise the terminal")?;
    if let Err(e) = crossterm::execute!(stdout(), SetTitle(title)) {
        warn!(error = %e, "could not set terminal title");
    }
    debug!(title, "terminal ready");
    Ok(terminal)
}

/// Leave the alternate screen and restore cooked mode.
pub fn restore() {
    ratatui::restore();
    debug!("terminal restored");
}
