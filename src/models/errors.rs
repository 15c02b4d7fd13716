use thiserror::Error;

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// The input channel yielded no further lines
    #[error("input closed")]
    InputClosed,
    /// A `GameConfig` that cannot be played
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;
