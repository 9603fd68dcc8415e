pub mod config;
pub mod core;
pub mod game;

// Re-export for convenience
pub use crate::core::game::{Flow, Game};
pub use crate::game::DogGame;
