use std::fmt;

use rand::Rng;

use crate::config::MAX_LIVES;
use crate::game::words::{WordEntry, WORDS};

/// A guessable letter, always stored lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Fold case and accept only ASCII letters.
    pub fn from_char(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Letter(c.to_ascii_lowercase() as u8))
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    fn index(self) -> usize {
        (self.0 - b'a') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
    AlreadyGuessed,
}

/// Bookkeeping for one playthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    secret_index: usize,
    revealed: Vec<bool>,
    guessed: [bool; 26],
    lives: u8,
}

impl RoundState {
    /// Fresh round on the table entry at `secret_index`.
    ///
    /// # Panics
    /// If `secret_index` is outside the word table.
    pub fn new(secret_index: usize) -> Self {
        let word = WORDS[secret_index].word;
        Self {
            secret_index,
            revealed: vec![false; word.len()],
            guessed: [false; 26],
            lives: MAX_LIVES,
        }
    }

    /// Fresh round on a uniformly chosen word.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::new(rng.random_range(0..WORDS.len()))
    }

    pub fn entry(&self) -> WordEntry {
        WORDS[self.secret_index]
    }

    pub fn secret_word(&self) -> &'static str {
        self.entry().word
    }

    pub fn secret_index(&self) -> usize {
        self.secret_index
    }

    pub fn hint(&self) -> &'static str {
        self.entry().hint
    }

    pub fn revealed(&self) -> &[bool] {
        &self.revealed
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed[letter.index()]
    }

    /// Guessed letters in alphabetical order.
    pub fn guessed_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        (b'a'..=b'z')
            .map(Letter)
            .filter(|l| self.guessed[l.index()])
    }

    /// Record a guess and reveal matches. A miss costs one life.
    ///
    /// Win/lose checks are left to the caller.
    pub fn guess_letter(&mut self, letter: Letter) -> GuessOutcome {
        if self.is_guessed(letter) {
            return GuessOutcome::AlreadyGuessed;
        }
        self.guessed[letter.index()] = true;

        let word = self.secret_word();
        let mut found = false;
        for (flag, b) in self.revealed.iter_mut().zip(word.bytes()) {
            if b == letter.0 {
                *flag = true;
                found = true;
            }
        }

        if found {
            GuessOutcome::Hit
        } else {
            self.lives = self.lives.saturating_sub(1);
            GuessOutcome::Miss
        }
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.lives == 0
    }

    /// Upper-case letters where revealed, `_` elsewhere.
    pub fn masked_word(&self) -> String {
        self.secret_word()
            .chars()
            .zip(&self.revealed)
            .map(|(c, &r)| if r { c.to_ascii_uppercase() } else { '_' })
            .collect()
    }
}
