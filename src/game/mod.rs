/// Save the Dog: a hangman round with an animated dog and a HUD panel.
pub mod animation;
pub mod app;
pub mod assets;
pub mod dispatch;
pub mod hud;
pub mod renderer;
pub mod round;
pub mod session;
pub mod state;
pub mod words;

pub use app::DogGame;
pub use round::{GuessOutcome, Letter, RoundState};
pub use session::Session;
pub use state::GameState;
