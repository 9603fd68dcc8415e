/// Game lifecycle: Start -> Play -> Win/Dead -> Play.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Start,
    Play,
    Win,
    Dead,
}

/// Events that can move the lifecycle forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The player asked for a (new) round.
    StartPressed,
    /// A guess used up the last life.
    LivesExhausted,
    /// A guess revealed the last hidden letter.
    WordRevealed,
}

impl GameState {
    /// The state `trigger` leads to, or `None` if it does not apply here.
    pub fn transition(self, trigger: Trigger) -> Option<GameState> {
        use GameState::*;
        use Trigger::*;

        match (self, trigger) {
            (Start | Win | Dead, StartPressed) => Some(Play),
            (Play, LivesExhausted) => Some(Dead),
            (Play, WordRevealed) => Some(Win),
            _ => None,
        }
    }

    /// Whether letter guesses are accepted.
    pub fn accepts_guesses(self) -> bool {
        self == GameState::Play
    }

    /// Prompt shown at the bottom of the play area.
    pub fn prompt(self) -> Option<&'static str> {
        match self {
            GameState::Start => Some("Press SPACE to Start"),
            GameState::Play => None,
            GameState::Win => Some("You saved the dog! :) Press SPACE"),
            GameState::Dead => Some("The dog died... Press SPACE to restart"),
        }
    }
}
