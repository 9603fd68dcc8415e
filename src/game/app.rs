use std::time::Duration;

use crate::config::GameConfig;
use crate::core::canvas::PixelCanvas;
use crate::core::game::{Flow, Game};
use crate::core::input::InputEvent;
use crate::game::animation::AnimTimings;
use crate::game::assets::AssetRegistry;
use crate::game::dispatch::dispatch;
use crate::game::session::Session;
use crate::game::{hud, renderer};

/// Save the Dog, wired up for the engine loop.
pub struct DogGame {
    config: GameConfig,
    assets: AssetRegistry,
    timings: AnimTimings,
    session: Session,
    canvas: PixelCanvas,
}

impl DogGame {
    pub fn new(config: GameConfig, assets: AssetRegistry, session: Session) -> Self {
        let timings = assets.timings(&config.animation);
        let canvas = PixelCanvas::new(config.window.width, config.window.height, 0, 0);
        Self {
            config,
            assets,
            timings,
            session,
            canvas,
        }
    }

    /// Load assets from the configured paths and start on the title screen.
    pub fn load(config: GameConfig) -> Self {
        let assets = AssetRegistry::load(&config.assets, &config.sprite);
        Self::new(config, assets, Session::from_entropy())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl Game for DogGame {
    fn handle_event(&mut self, event: InputEvent) -> Flow {
        let action = dispatch(self.session.state(), event);
        self.session.apply(action)
    }

    fn on_tick(&mut self, dt: f32) {
        self.session.advance(dt, &self.timings);
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        self.canvas.resize(area.width, area.height);
        let cmds = hud::compose(&self.session, &self.config);
        renderer::paint(&cmds, &self.assets, &mut self.canvas);
        frame.render_widget(&self.canvas, area);
    }

    fn frame_delay(&self) -> Duration {
        self.config.frame_delay
    }
}
