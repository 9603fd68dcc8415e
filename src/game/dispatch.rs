/// Contextual mapping from key presses to game actions.
use crate::core::input::{InputEvent, Key};
use crate::game::round::Letter;
use crate::game::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    StartRound,
    Guess(Letter),
    Ignore,
}

pub fn dispatch(state: GameState, event: InputEvent) -> Action {
    match event {
        InputEvent::Quit | InputEvent::KeyDown(Key::Escape) => Action::Quit,
        InputEvent::KeyDown(Key::Space) if !state.accepts_guesses() => Action::StartRound,
        InputEvent::KeyDown(Key::Char(c)) if state.accepts_guesses() => {
            Letter::from_char(c).map_or(Action::Ignore, Action::Guess)
        }
        InputEvent::KeyDown(_) => Action::Ignore,
    }
}
