//! Move resolution.
//!
//! `RulesEngine` is the seam between the session controller and the game
//! rules:
//! - How a roll moves a player
//! - Which connections apply
//! - When the game is won and whose turn is next
//!
//! `ClassicRules` implements the standard game on any validated board.

pub mod classic;
pub mod engine;

pub use classic::ClassicRules;
pub use engine::{Resolution, RulesEngine};
