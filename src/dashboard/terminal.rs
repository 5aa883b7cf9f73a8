use crate::dashboard::widgets::draw_station;
use crate::error::AqiError;
use crate::types::station::Station;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use log::warn;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

/// A terminal in raw mode on the alternate screen.
///
/// The terminal is handed back to the shell when the session is dropped, on
/// every exit path.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn start() -> Result<Self, AqiError> {
        enable_raw_mode().map_err(AqiError::TerminalInit)?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            release();
            return Err(AqiError::TerminalInit(e));
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(mut terminal) => {
                if let Err(e) = terminal.clear() {
                    release();
                    return Err(AqiError::TerminalInit(e));
                }
                Ok(Self { terminal })
            }
            Err(e) => {
                release();
                Err(AqiError::TerminalInit(e))
            }
        }
    }

    pub fn draw(&mut self, station: &Station) -> Result<(), AqiError> {
        self.terminal
            .draw(|frame| draw_station(frame, station))
            .map_err(AqiError::TerminalIo)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        release();
    }
}

// Errors here are logged only; there is nothing left to hand them to
fn release() {
    if let Err(e) = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen) {
        warn!("Failed to leave the alternate screen: {}", e);
    }
    if let Err(e) = disable_raw_mode() {
        warn!("Failed to disable raw mode: {}", e);
    }
}
