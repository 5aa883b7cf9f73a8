//! The interactive station dashboard.

pub mod terminal;
pub mod widgets;

use crate::error::AqiError;
use crate::report::StationViewer;
use crate::types::station::Station;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use terminal::TerminalSession;

/// Shows each station full screen until the user presses `q` or `Ctrl-C`.
///
/// The view is static: it is drawn once and only redrawn when the terminal is
/// resized.
#[derive(Debug, Default)]
pub struct Dashboard;

impl Dashboard {
    pub fn new() -> Self {
        Self
    }
}

impl StationViewer for Dashboard {
    fn view(&mut self, station: &Station) -> Result<(), AqiError> {
        let mut session = TerminalSession::start()?;
        session.draw(station)?;

        loop {
            let event = event::read().map_err(AqiError::TerminalIo)?;
            if is_quit_event(&event) {
                debug!("Closing dashboard for {}", station.place);
                return Ok(());
            }
            if let Event::Resize(..) = event {
                session.draw(station)?;
            }
        }
    }
}

/// Whether `event` dismisses the dashboard: a press of `q` or `Ctrl-C`.
pub fn is_quit_event(event: &Event) -> bool {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('q') => true,
            KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        },
        _ => false,
    }
}
