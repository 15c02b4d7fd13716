use log::trace;

use super::config::GameConfig;
use super::constants::{ALPHABET, PLACEHOLDER};
use crate::services::reveal;

/// Result of applying one normalized guess to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not in the remaining letters. Nothing changed.
    Rejected,
    /// The letter occurs `positions` times in the secret word.
    Hit { positions: usize },
    /// The letter does not occur in the secret word.
    Miss,
}

/// Everything that changes during a session.
#[derive(Debug, Clone)]
pub struct GameState {
    secret_word: String,
    revealed_pattern: Vec<char>,
    remaining_letters: Vec<char>,
    wrong_guess_count: u32,
    /// Accepted guesses so far.
    guess_count: u32,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        let secret_word = config.secret_word().to_string();
        let revealed_pattern = vec![PLACEHOLDER; secret_word.chars().count()];
        GameState {
            secret_word,
            revealed_pattern,
            remaining_letters: ALPHABET.to_vec(),
            wrong_guess_count: 0,
            guess_count: 0,
        }
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn revealed_pattern(&self) -> String {
        self.revealed_pattern.iter().collect()
    }

    pub fn remaining_letters(&self) -> &[char] {
        &self.remaining_letters
    }

    pub fn wrong_guess_count(&self) -> u32 {
        self.wrong_guess_count
    }

    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed_pattern.iter().copied().eq(self.secret_word.chars())
    }

    /// Applies an already-uppercased guess.
    ///
    /// Anything that is not exactly one letter still in the pool is rejected
    /// without touching the state.
    pub fn apply_guess(&mut self, guess: &str) -> GuessOutcome {
        let mut chars = guess.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => return GuessOutcome::Rejected,
        };
        let Some(index) = self.remaining_letters.iter().position(|&c| c == letter) else {
            return GuessOutcome::Rejected;
        };

        let positions = reveal::reveal_letter(&self.secret_word, &mut self.revealed_pattern, letter);
        self.remaining_letters.remove(index);
        self.guess_count += 1;
        trace!("{} revealed at {} position(s)", letter, positions);

        if positions == 0 {
            self.wrong_guess_count += 1;
            GuessOutcome::Miss
        } else {
            GuessOutcome::Hit { positions }
        }
    }
}

#[cfg(test)]
impl GameState {
    pub(crate) fn drain_remaining_letters(&mut self) {
        self.remaining_letters.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
