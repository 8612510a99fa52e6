//! Shortcuts and setbacks.

use serde::{Deserialize, Serialize};

use super::Square;

/// Direction of a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionKind {
    /// Moves the player forward (a ladder).
    Shortcut,
    /// Moves the player backward (a snake).
    Setback,
}

impl std::fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionKind::Shortcut => write!(f, "Shortcut"),
            ConnectionKind::Setback => write!(f, "Setback"),
        }
    }
}

/// A fixed jump from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    pub start: Square,
    pub end: Square,
    pub kind: ConnectionKind,
}

impl Connection {
    #[must_use]
    pub const fn shortcut(start: Square, end: Square) -> Self {
        Self {
            start,
            end,
            kind: ConnectionKind::Shortcut,
        }
    }

    #[must_use]
    pub const fn setback(start: Square, end: Square) -> Self {
        Self {
            start,
            end,
            kind: ConnectionKind::Setback,
        }
    }

    /// Whether `kind` agrees with the direction of travel.
    #[must_use]
    pub fn is_well_directed(&self) -> bool {
        match self.kind {
            ConnectionKind::Shortcut => self.end > self.start,
            ConnectionKind::Setback => self.end < self.start,
        }
    }

    /// Signed number of squares gained.
    #[must_use]
    pub fn delta(&self) -> i16 {
        i16::from(self.end) - i16::from(self.start)
    }
}
