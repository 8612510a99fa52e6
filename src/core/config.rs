//! Game configuration.
//!
//! `GameConfig` collects everything a session needs at startup:
//! - `Board`: square count and connections
//! - Roster: the `PlayerProfile`s spawned on every new game
//! - Die faces, optional RNG seed, overshoot policy
//! - The banner and history texts shown on start and reset
//!
//! The default is the classic two-player Neon Nexus game.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::player::{default_roster, PlayerProfile};
use super::state::GameState;
use crate::board::Board;
use crate::error::ConfigError;

/// What happens when a roll would carry a player past the final square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OvershootPolicy {
    /// Player stays put, the same player keeps the turn, and nothing is
    /// logged. Classic behavior.
    #[default]
    StayPut,
    /// Player stays put, the turn passes on, and a `Normal` event with
    /// `from == to` is logged.
    ForfeitTurn,
}

/// Complete game configuration.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub board: Board,

    /// Profiles spawned on every new game, in turn order.
    pub roster: Vec<PlayerProfile>,

    /// Number of die faces (classic: 6).
    pub die_faces: u8,

    /// Seed for the session die. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    pub overshoot: OvershootPolicy,

    /// History message of the first game's Start event.
    pub welcome_message: String,
    /// Commentary shown before the first move of the first game.
    pub welcome_banner: String,
    /// History message of the Start event after a reset.
    pub reset_message: String,
    /// Commentary shown after a reset.
    pub reset_banner: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: Board::classic(),
            roster: default_roster(),
            die_faces: 6,
            seed: None,
            overshoot: OvershootPolicy::default(),
            welcome_message: "Welcome to the Nexus.".to_string(),
            welcome_banner: "System Online. Prepare for synchronization.".to_string(),
            reset_message: "Grid Reset.".to_string(),
            reset_banner: "System reboot complete. Begin Phase 1.".to_string(),
        }
    }
}

impl GameConfig {
    /// The classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the board.
    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Replace the whole roster.
    #[must_use]
    pub fn with_roster(mut self, roster: Vec<PlayerProfile>) -> Self {
        self.roster = roster;
        self
    }

    /// Append a player to the roster.
    #[must_use]
    pub fn with_player(mut self, profile: PlayerProfile) -> Self {
        self.roster.push(profile);
        self
    }

    /// Set the number of die faces.
    #[must_use]
    pub fn with_die_faces(mut self, faces: u8) -> Self {
        self.die_faces = faces;
        self
    }

    /// Fix the die seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the overshoot policy.
    #[must_use]
    pub fn with_overshoot(mut self, policy: OvershootPolicy) -> Self {
        self.overshoot = policy;
        self
    }

    /// Set the start-of-game message and banner.
    #[must_use]
    pub fn with_welcome(mut self, message: impl Into<String>, banner: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self.welcome_banner = banner.into();
        self
    }

    /// Set the after-reset message and banner.
    #[must_use]
    pub fn with_reset_texts(mut self, message: impl Into<String>, banner: impl Into<String>) -> Self {
        self.reset_message = message.into();
        self.reset_banner = banner.into();
        self
    }

    /// Check roster and die settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if self.roster.len() > 255 {
            return Err(ConfigError::TooManyPlayers(self.roster.len()));
        }

        let mut seen = FxHashSet::default();
        for profile in &self.roster {
            if !seen.insert(profile.id) {
                return Err(ConfigError::DuplicatePlayer(profile.id));
            }
        }

        if self.die_faces == 0 {
            return Err(ConfigError::InvalidDieFaces);
        }

        Ok(())
    }

    /// Check that a prepared state fits this configuration: every player
    /// is in the roster and stands on the track.
    pub fn validate_state(&self, state: &GameState) -> Result<(), ConfigError> {
        let total = self.board.total_squares();
        for player in state.players() {
            if !self.roster.iter().any(|p| p.id == player.id) {
                return Err(ConfigError::UnknownPlayer(player.id));
            }
            if !(1..=total).contains(&player.position) {
                return Err(ConfigError::PlayerOffBoard {
                    player: player.id,
                    square: player.position,
                    total,
                });
            }
        }
        Ok(())
    }
}
