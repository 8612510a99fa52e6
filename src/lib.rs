//! # nexus-grid
//!
//! Turn engine for "Neon Nexus: 2099", a snakes-and-ladders variant, with
//! optional AI commentary.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: a `GameSession` owns its `GameState`. There is
//!    no global game; any number of sessions can run side by side.
//!
//! 2. **Atomic turns**: the rules compute a complete `Resolution` first,
//!    then the state commits it in one step.
//!
//! 3. **Injectable randomness**: every roll goes through `DieRoller`, so
//!    games replay exactly from a seed or a script.
//!
//! 4. **Isolated commentary**: commentary runs after a move commits and
//!    only writes a last-write-wins text slot. Failures fall back to
//!    canned text.
//!
//! ## Modules
//!
//! - `core`: players, events, state, dice, configuration
//! - `board`: topology, connections, grid layout
//! - `rules`: `RulesEngine` trait and classic rules
//! - `session`: `GameSession` controller
//! - `commentary`: commentary generators and dispatcher
//! - `error`: error types
//! - `telemetry`: tracing setup
//!
//! ## Example
//!
//! ```
//! use nexus_grid::{GameConfig, GameSession, PlayerId, ScriptedDie, EventKind};
//!
//! let mut session = GameSession::with_die(GameConfig::new(), ScriptedDie::new(vec![1])).unwrap();
//! let result = session.request_roll().unwrap();
//!
//! // Square 2 is a hyper-loop to 38.
//! assert_eq!(result.position, 38);
//! assert_eq!(result.event.unwrap().kind, EventKind::Shortcut);
//! assert_eq!(session.state().current_player().id, PlayerId::new(2));
//! ```

pub mod board;
pub mod commentary;
pub mod core;
pub mod error;
pub mod rules;
pub mod session;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{
    DieRoller, ScriptedDie, SeededDie,
    EventKind, GameEvent,
    GameConfig, OvershootPolicy,
    GameState, TurnPhase,
    Player, PlayerId, PlayerProfile,
};

pub use crate::board::{Board, Connection, ConnectionKind, GridCoord, GridLayout, Square};

pub use crate::rules::{ClassicRules, Resolution, RulesEngine};

pub use crate::session::{GameSession, PendingRoll};

pub use crate::commentary::{
    CannedCommentator, CommentaryConfig, CommentaryDispatcher, CommentaryGenerator,
    CommentaryRequest, CommentarySlot, GeminiCommentator,
};

pub use crate::error::{BoardError, CommentaryError, ConfigError, GameError};
