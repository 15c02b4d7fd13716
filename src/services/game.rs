use log::{debug, info};

use crate::game_engine::{GameEngine, GameStatus};
use crate::io::{InputReader, OutputWriter, TerminalIO};
use crate::models::config::GameConfig;
use crate::models::errors::{GameError, GameResult};
use crate::models::game_state::GuessOutcome;
use crate::ui::presenters::SessionPresenter;

pub const PROMPT: &str = "guess a letter:";

/// One hangman session: the engine plus the turn loop around it.
pub struct Game {
    engine: GameEngine,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Game {
            engine: GameEngine::new(config),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Plays on stdin/stdout until the game ends.
    pub fn run(&mut self) -> GameResult<()> {
        let mut terminal = TerminalIO;
        let mut output = TerminalIO;
        self.play(&mut terminal, &mut output)?;
        Ok(())
    }

    /// Runs turns until a terminal status, then prints the summary.
    ///
    /// End of input forfeits the game. Other I/O errors abort the session
    /// without a summary.
    pub fn play(
        &mut self,
        input: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GameResult<GameStatus> {
        info!(
            "starting game: {} letters, {} wrong guesses allowed",
            self.engine.state().secret_word().len(),
            self.engine.wrong_guess_limit()
        );

        while !self.engine.status().is_over() {
            SessionPresenter::show_turn(
                &self.engine.state().revealed_pattern(),
                self.engine.guesses_left(),
                output,
            );

            let line = match input.read_line(PROMPT) {
                Ok(line) => line,
                Err(GameError::InputClosed) => {
                    debug!("input closed");
                    self.engine.forfeit();
                    break;
                }
                Err(e) => return Err(e),
            };

            if self.engine.guess(&line) == GuessOutcome::Rejected {
                continue;
            }
            SessionPresenter::show_remaining_letters(self.engine.state().remaining_letters(), output);
        }

        let status = self.engine.status().clone();
        SessionPresenter::show_outcome(&status, output);
        SessionPresenter::show_game_over(self.engine.state().secret_word(), output);
        Ok(status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
