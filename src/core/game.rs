/// Core game interface driven by the engine loop.
use std::time::Duration;

use crate::core::input::InputEvent;

/// Whether the loop keeps running after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A single-screen game the [`Engine`](crate::core::engine::Engine) can drive.
pub trait Game {
    /// Apply one input event.
    fn handle_event(&mut self, event: InputEvent) -> Flow;

    /// Advance time-based state by `dt` seconds.
    fn on_tick(&mut self, dt: f32);

    /// Draw the current state into the Ratatui frame.
    fn render(&mut self, frame: &mut ratatui::Frame);

    /// Pause between frames.
    fn frame_delay(&self) -> Duration {
        Duration::from_millis(10)
    }
}
