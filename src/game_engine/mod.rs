//! Game state machine
//!
//! Owns the session's `GameState` and tracks whether the game is still being
//! played. Termination is evaluated only after an accepted guess.

use log::{debug, info};

use crate::models::config::GameConfig;
use crate::models::game_state::{GameState, GuessOutcome};

/// Core game engine that applies guesses and decides when the game ends
pub struct GameEngine {
    state: GameState,
    wrong_guess_limit: u32,
    status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost { reason: DefeatReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatReason {
    WrongGuessLimit,
    LettersExhausted,
    InputClosed,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::Playing
    }
}

/// Drops the line terminator and uppercases the rest.
///
/// Other whitespace is kept, so a padded guess fails the membership check.
pub fn normalize_guess(raw: &str) -> String {
    let line = raw.strip_suffix('\n').unwrap_or(raw);
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.to_uppercase()
}

impl GameEngine {
    /// Creates a new engine in the Playing state
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            wrong_guess_limit: config.wrong_guess_limit(),
            status: GameStatus::Playing,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn wrong_guess_limit(&self) -> u32 {
        self.wrong_guess_limit
    }

    /// Wrong guesses the player can still afford.
    pub fn guesses_left(&self) -> u32 {
        self.wrong_guess_limit
            .saturating_sub(self.state.wrong_guess_count())
    }

    /// Normalizes and applies one line of player input.
    ///
    /// Input is ignored once the game is over. A rejected guess skips the
    /// game-over check entirely.
    pub fn guess(&mut self, raw: &str) -> GuessOutcome {
        if self.status.is_over() {
            return GuessOutcome::Rejected;
        }

        let guess = normalize_guess(raw);
        let outcome = self.state.apply_guess(&guess);
        match outcome {
            GuessOutcome::Rejected => debug!("rejected guess {:?}", guess),
            _ => {
                debug!(
                    "accepted {} ({:?}), pattern {}, wrong {}",
                    guess,
                    outcome,
                    self.state.revealed_pattern(),
                    self.state.wrong_guess_count()
                );
                self.check_game_over();
            }
        }
        outcome
    }

    /// Ends the game because no more input will arrive.
    pub fn forfeit(&mut self) {
        if !self.status.is_over() {
            self.status = GameStatus::Lost {
                reason: DefeatReason::InputClosed,
            };
            info!("game forfeited");
        }
    }

    /// Checks for game over conditions and updates the game status
    ///
    /// # Returns
    ///
    /// * `Some(GameStatus)` if the game has ended
    /// * `None` if the game is still in progress
    ///
    /// Conditions are checked in order, so completing the word with the last
    /// remaining letter is a win.
    pub fn check_game_over(&mut self) -> Option<GameStatus> {
        if self.status.is_over() {
            return Some(self.status.clone());
        }

        if self.state.is_fully_revealed() {
            self.status = GameStatus::Won;
        } else if self.state.wrong_guess_count() >= self.wrong_guess_limit {
            self.status = GameStatus::Lost {
                reason: DefeatReason::WrongGuessLimit,
            };
        } else if self.state.remaining_letters().is_empty() {
            self.status = GameStatus::Lost {
                reason: DefeatReason::LettersExhausted,
            };
        } else {
            return None;
        }

        info!("game over: {:?}", self.status);
        Some(self.status.clone())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
