use crate::game_engine::{DefeatReason, GameStatus};
use crate::io::OutputWriter;

pub struct SessionPresenter;

impl SessionPresenter {
    pub fn show_turn(pattern: &str, guesses_left: u32, output: &mut dyn OutputWriter) {
        output.writeln(&format!("current guess: {}", pattern));
        output.writeln(&format!("you have {} guesses left", guesses_left));
    }

    /// Raw listing of the letters still available, e.g. `[A, B, C]`.
    pub fn show_remaining_letters(letters: &[char], output: &mut dyn OutputWriter) {
        let listing = letters
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        output.writeln(&format!("[{}]", listing));
    }

    pub fn show_outcome(status: &GameStatus, output: &mut dyn OutputWriter) {
        let message = match status {
            GameStatus::Playing => return,
            GameStatus::Won => "Yay you win!",
            GameStatus::Lost { reason } => match reason {
                DefeatReason::WrongGuessLimit => "Sucks, you lost!",
                DefeatReason::LettersExhausted => "You've run out of letters.",
                DefeatReason::InputClosed => "No more input, forfeiting.",
            },
        };
        output.writeln(message);
    }

    pub fn show_game_over(secret_word: &str, output: &mut dyn OutputWriter) {
        output.writeln("Game over!");
        output.writeln(&format!("The word was: {}", secret_word));
    }
}
