//! Player identity, profiles, and runtime players.
//!
//! ## PlayerId
//!
//! Stable identifier chosen by the roster, not a seat index. The classic
//! roster uses ids 1 and 2.
//!
//! ## PlayerProfile / Player
//!
//! A `PlayerProfile` is the configured description of a player. Each new
//! game spawns fresh `Player` values from the profiles, so nothing from a
//! previous game survives a reset.

use serde::{Deserialize, Serialize};

use crate::board::Square;

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Configured description of a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub name: String,
    /// CSS color used by presentation layers.
    pub color: String,
    /// Avatar image reference.
    pub avatar: String,
}

impl PlayerProfile {
    /// Create a profile with a neutral color and no avatar.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: "#94a3b8".to_string(),
            avatar: String::new(),
        }
    }

    /// Set the display color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Create a fresh player standing on `start`.
    #[must_use]
    pub fn spawn(&self, start: Square) -> Player {
        Player {
            id: self.id,
            name: self.name.clone(),
            color: self.color.clone(),
            avatar: self.avatar.clone(),
            position: start,
        }
    }
}

/// The two pilots of the classic game.
#[must_use]
pub fn default_roster() -> Vec<PlayerProfile> {
    vec![
        PlayerProfile::new(PlayerId::new(1), "Cyber-Punker")
            .with_color("#22d3ee")
            .with_avatar("https://picsum.photos/seed/cyber1/100/100"),
        PlayerProfile::new(PlayerId::new(2), "Void-Runner")
            .with_color("#c084fc")
            .with_avatar("https://picsum.photos/seed/cyber2/100/100"),
    ]
}

/// A player in a running game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    pub avatar: String,
    /// Current square, `1..=total`.
    pub position: Square,
}
