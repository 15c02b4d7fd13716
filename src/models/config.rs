//! Session configuration.
//!
//! The shipped game always plays [`GameConfig::default`]. Custom configs exist
//! so a session can be embedded or tested against other words.

use super::constants::{SECRET_WORD, WRONG_GUESS_LIMIT};
use super::errors::{GameError, GameResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    secret_word: String,
    wrong_guess_limit: u32,
}

impl GameConfig {
    /// Builds a config, rejecting words that could never be revealed.
    ///
    /// The word must be non-empty and consist only of `A`-`Z`, since guesses
    /// are normalized to uppercase before comparison. The limit must be at
    /// least one.
    pub fn new(secret_word: &str, wrong_guess_limit: u32) -> GameResult<Self> {
        if secret_word.is_empty() {
            return Err(GameError::InvalidConfig("secret word is empty".to_string()));
        }
        if let Some(c) = secret_word.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(GameError::InvalidConfig(format!(
                "secret word contains {:?}, expected A-Z only",
                c
            )));
        }
        if wrong_guess_limit == 0 {
            return Err(GameError::InvalidConfig(
                "wrong guess limit must be at least 1".to_string(),
            ));
        }

        Ok(GameConfig {
            secret_word: secret_word.to_string(),
            wrong_guess_limit,
        })
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn wrong_guess_limit(&self) -> u32 {
        self.wrong_guess_limit
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            secret_word: SECRET_WORD.to_string(),
            wrong_guess_limit: WRONG_GUESS_LIMIT,
        }
    }
}
