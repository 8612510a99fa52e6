//! Session controller.
//!
//! `GameSession` is the explicit owner of a `GameState`. Sessions are
//! independent, so any number of games can run side by side.

mod game_session;

pub use game_session::{GameSession, PendingRoll};
