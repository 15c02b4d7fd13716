//! Hangman
//!
//! A console word-guessing game. A fixed secret word is hidden behind blanks
//! and the player guesses letters until the word is revealed, five wrong
//! guesses have been made, or no letters are left to guess.
//!
//! # Modules
//!
//! - [`game_engine`] - Game status machine and game-over logic
//! - [`models`] - Constants, configuration, game state and errors
//! - [`services`] - The turn loop and letter reveal
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Player-facing text
//! - [`cli`] - Command-line parsing
//!
//! # Example
//!
//! ```rust
//! use hangman::{GameConfig, GameEngine, GameStatus};
//!
//! let config = GameConfig::new("CAT", 5).unwrap();
//! let mut engine = GameEngine::new(&config);
//! for letter in ["c", "a", "t"] {
//!     engine.guess(letter);
//! }
//! assert_eq!(*engine.status(), GameStatus::Won);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{DefeatReason, GameEngine, GameStatus};
pub use models::config::GameConfig;
pub use models::errors::{GameError, GameResult};
pub use models::game_state::{GameState, GuessOutcome};
pub use services::game::Game;
