//! Domain models
//!
//! This module contains the session's data: fixed constants, configuration,
//! the mutable game state and the error type. Models hold minimal logic.

pub mod config;
pub mod constants;
pub mod errors;
pub mod game_state;
