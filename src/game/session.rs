use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::core::game::Flow;
use crate::game::animation::{AnimTimings, AnimationClock};
use crate::game::dispatch::Action;
use crate::game::round::{GuessOutcome, Letter, RoundState};
use crate::game::state::{GameState, Trigger};

/// Everything that changes while the game runs.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    round: Option<RoundState>,
    animation: AnimationClock,
    rng: StdRng,
}

impl Session {
    pub fn new(rng: StdRng) -> Self {
        Self {
            state: GameState::Start,
            round: None,
            animation: AnimationClock::new(),
            rng,
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// The current round; `None` until the first round starts.
    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    pub fn animation(&self) -> &AnimationClock {
        &self.animation
    }

    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => {
                info!(state = ?self.state, "quit requested");
                return Flow::Quit;
            }
            Action::StartRound => {
                self.press_start();
            }
            Action::Guess(letter) => {
                self.guess(letter);
            }
            Action::Ignore => {}
        }
        Flow::Continue
    }

    /// Start a new random round if the current state allows it.
    pub fn press_start(&mut self) -> bool {
        let round = RoundState::random(&mut self.rng);
        self.begin_round(round)
    }

    /// Like [`press_start`](Self::press_start) with a chosen round.
    pub fn begin_round(&mut self, round: RoundState) -> bool {
        let Some(next) = self.state.transition(Trigger::StartPressed) else {
            return false;
        };
        info!(secret_index = round.secret_index(), "round started");
        debug!(word = round.secret_word(), "secret");
        self.round = Some(round);
        self.animation.reset();
        self.state = next;
        true
    }

    /// Guess a letter in the running round, then check for win or loss.
    ///
    /// Returns `None` when no round is being played.
    pub fn guess(&mut self, letter: Letter) -> Option<GuessOutcome> {
        if !self.state.accepts_guesses() {
            return None;
        }
        let round = self.round.as_mut()?;
        let outcome = round.guess_letter(letter);
        debug!(%letter, ?outcome, lives = round.lives(), "guess");

        let trigger = match outcome {
            GuessOutcome::Miss if round.is_out_of_lives() => Some(Trigger::LivesExhausted),
            GuessOutcome::Hit if round.is_fully_revealed() => Some(Trigger::WordRevealed),
            _ => None,
        };

        if let Some(next) = trigger.and_then(|t| self.state.transition(t)) {
            if next == GameState::Dead {
                self.animation.reset_frame();
                info!(word = round.secret_word(), "out of lives");
            } else {
                info!(word = round.secret_word(), "word revealed");
            }
            self.state = next;
        }
        Some(outcome)
    }

    pub fn advance(&mut self, dt: f32, timings: &AnimTimings) {
        self.animation.advance(dt, self.state, timings);
    }
}
