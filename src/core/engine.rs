use std::time::Instant;

use anyhow::{anyhow, Result};
use ratatui::backend::Backend;
use ratatui::{DefaultTerminal, Terminal};
use tracing::{debug, info};

use crate::core::game::{Flow, Game};
use crate::core::input::{self, InputEvent};

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    /// One frame: apply input, advance time, draw.
    ///
    /// Events after a quit are not applied and nothing is drawn.
    pub fn step<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: impl IntoIterator<Item = InputEvent>,
        dt: f32,
    ) -> Result<Flow> {
        for event in events {
            if self.game.handle_event(event) == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }

        self.game.on_tick(dt);

        terminal
            .draw(|f| self.game.render(f))
            .map_err(|e| anyhow!("failed to draw frame: {e}"))?;
        Ok(Flow::Continue)
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        info!("entering main loop");
        let mut last = Instant::now();
        let mut frames: u64 = 0;

        loop {
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;

            // INPUT (non-blocking drain)
            let events = input::poll_events()?;
            if self.step(&mut terminal, events, dt)? == Flow::Quit {
                break;
            }
            frames += 1;

            tokio::time::sleep(self.game.frame_delay()).await;
        }

        debug!(frames, "main loop finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Key;
    use ratatui::backend::TestBackend;
    use ratatui::widgets::Paragraph;

    #[derive(Default)]
    struct Counter {
        ticks: u32,
        elapsed: f32,
        keys: Vec<Key>,
    }

    impl Game for Counter {
        fn handle_event(&mut self, event: InputEvent) -> Flow {
            match event {
                InputEvent::Quit => Flow::Quit,
                InputEvent::KeyDown(k) => {
                    self.keys.push(k);
                    Flow::Continue
                }
            }
        }

        fn on_tick(&mut self, dt: f32) {
            self.ticks += 1;
            self.elapsed += dt;
        }

        fn render(&mut self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(format!("ticks {}", self.ticks)), frame.area());
        }
    }

    #[test]
    fn step_applies_input_then_ticks_then_draws() {
        let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
        let mut engine = Engine::new(Counter::default());

        let flow = engine
            .step(&mut terminal, [InputEvent::KeyDown(Key::Space)], 0.5)
            .unwrap();
        assert_eq!(flow, Flow::Continue);
        assert_eq!(engine.game().ticks, 1);
        assert_eq!(engine.game().elapsed, 0.5);
        assert_eq!(engine.game().keys, vec![Key::Space]);
        assert_eq!(terminal.backend().buffer()[(6, 0)].symbol(), "1");
    }

    #[test]
    fn quit_stops_before_tick() {
        let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
        let mut engine = Engine::new(Counter::default());

        let flow = engine
            .step(
                &mut terminal,
                [InputEvent::Quit, InputEvent::KeyDown(Key::Char('a'))],
                0.1,
            )
            .unwrap();
        assert_eq!(flow, Flow::Quit);
        assert_eq!(engine.game().ticks, 0);
        assert!(engine.game().keys.is_empty());
    }
}
