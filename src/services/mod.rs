//! Game services
//!
//! The session loop and the letter-reveal logic it relies on.

pub mod game;
pub mod reveal;
