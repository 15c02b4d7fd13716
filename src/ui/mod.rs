//! User interface and presentation
//!
//! Presenters own every player-facing string so the session loop only deals
//! with state.

pub mod presenters;
