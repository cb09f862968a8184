//! Scoped ownership of the terminal used as the drawing surface.

use color_eyre::{Result, eyre::WrapErr};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

/// The terminal in raw mode on the alternate screen.
///
/// Acquiring it is the only fallible startup step after logging; dropping
/// it puts the terminal back the way it was found, on every exit path.
pub struct Screen {
    terminal: DefaultTerminal,
}

impl Screen {
    /// Switch the terminal into raw mode and the alternate screen.
    pub fn acquire() -> Result<Self> {
        let terminal = match ratatui::try_init() {
            Ok(terminal) => terminal,
            Err(err) => {
                // Undo whatever part of the setup did succeed.
                ratatui::restore();
                return Err(err).wrap_err("failed to initialize terminal");
            }
        };
        info!("terminal acquired");
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("terminal restored");
    }
}
