//! Keyboard input and the commands it maps to.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use glyphfall_core::config::{
    FAST_DESCENT_SPEED, LONG_TRAIL_FADE_RATE, SHORT_TRAIL_FADE_RATE, SLOW_DESCENT_SPEED,
};

/// Something the user asked the application to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Stop after the current frame.
    Close,
    SetDescentSpeed(f32),
    SetFadeRate(f32),
}

/// Source of pending terminal events.
pub trait EventSource {
    /// Take every event that is ready without blocking.
    fn drain(&mut self) -> io::Result<Vec<Event>>;
}

/// Events read from the real terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn drain(&mut self) -> io::Result<Vec<Event>> {
        let mut pending = Vec::new();
        while event::poll(Duration::ZERO)? {
            pending.push(event::read()?);
        }
        Ok(pending)
    }
}

/// Map a terminal event to a command. Only key presses count.
pub fn command_for(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => command_for_key(*key),
        _ => None,
    }
}

fn command_for_key(key: KeyEvent) -> Option<Command> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc | KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => Some(Command::Close),
        (_, KeyCode::Up) => Some(Command::SetDescentSpeed(FAST_DESCENT_SPEED)),
        (_, KeyCode::Down) => Some(Command::SetDescentSpeed(SLOW_DESCENT_SPEED)),
        (_, KeyCode::Right) => Some(Command::SetFadeRate(LONG_TRAIL_FADE_RATE)),
        (_, KeyCode::Left) => Some(Command::SetFadeRate(SHORT_TRAIL_FADE_RATE)),
        _ => None,
    }
}
