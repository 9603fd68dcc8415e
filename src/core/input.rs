/// Raw input events, decoupled from the terminal backend.
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window/terminal level request to close.
    Quit,
    KeyDown(Key),
}

impl InputEvent {
    /// Translate a crossterm event. Releases and repeats are dropped.
    pub fn from_crossterm(ev: Event) -> Option<Self> {
        match ev {
            Event::Key(key) => Self::from_key(key),
            _ => None,
        }
    }

    fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        {
            return Some(InputEvent::Quit);
        }
        let key = match key.code {
            KeyCode::Esc => Key::Escape,
            KeyCode::Char(' ') => Key::Space,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        };
        Some(InputEvent::KeyDown(key))
    }
}

/// Drain every pending event without blocking.
pub fn poll_events() -> Result<Vec<InputEvent>> {
    let mut events = Vec::new();
    while event::poll(Duration::from_millis(0))? {
        if let Some(ev) = InputEvent::from_crossterm(event::read()?) {
            events.push(ev);
        }
    }
    Ok(events)
}
