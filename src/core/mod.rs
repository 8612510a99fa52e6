//! Core engine types: players, events, state, dice, configuration.
//!
//! These are the building blocks shared by the rules, the session
//! controller, and the commentary layer.

pub mod config;
pub mod event;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, OvershootPolicy};
pub use event::{EventKind, GameEvent};
pub use player::{default_roster, Player, PlayerId, PlayerProfile};
pub use rng::{DieRoller, ScriptedDie, SeededDie};
pub use state::{GameState, TurnPhase};
