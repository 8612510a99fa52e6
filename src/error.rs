//! Error types.
//!
//! Game-play operations never fail: out-of-turn requests are ignored and
//! commentary failures fall back to canned text. Errors only surface while
//! building a board, a configuration, or a commentary client.

use thiserror::Error;

use crate::board::{ConnectionKind, Square};
use crate::core::PlayerId;

/// Board topology rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("grid side must be between 2 and 15, got {0}")]
    InvalidSide(u8),

    #[error("connection {start}->{end} leaves the board (1..={total})")]
    OutOfRange { start: Square, end: Square, total: Square },

    #[error("connection at square {0} loops onto itself")]
    SelfLoop(Square),

    #[error("square {0} already has a connection")]
    DuplicateStart(Square),

    #[error("{kind} {start}->{end} points the wrong way")]
    WrongDirection {
        kind: ConnectionKind,
        start: Square,
        end: Square,
    },

    #[error("connections may not start on square {0}")]
    ReservedSquare(Square),
}

/// Invalid game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("roster is empty")]
    EmptyRoster,

    #[error("at most 255 players supported, got {0}")]
    TooManyPlayers(usize),

    #[error("duplicate player id {0}")]
    DuplicatePlayer(PlayerId),

    #[error("die must have at least one face")]
    InvalidDieFaces,

    #[error("{0} is not in the roster")]
    UnknownPlayer(PlayerId),

    #[error("{player} is on square {square}, outside 1..={total}")]
    PlayerOffBoard {
        player: PlayerId,
        square: Square,
        total: Square,
    },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Commentary generation failure. Never escapes the commentary layer
/// during play; see [`crate::commentary::commentary_or_fallback`].
#[derive(Debug, Error)]
pub enum CommentaryError {
    #[error("no commentary API key configured")]
    MissingApiKey,

    #[error("invalid value for {name}: '{value}'")]
    InvalidVar { name: String, value: String },

    #[error("commentary dispatch requires a tokio runtime")]
    NoRuntime,

    #[error("commentary request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("commentary service returned HTTP {0}")]
    Status(u16),

    #[error("malformed commentary response: {0}")]
    Malformed(String),
}

/// Top-level error for session construction.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Commentary(#[from] CommentaryError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Config(ConfigError::Board(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::WrongDirection {
            kind: ConnectionKind::Shortcut,
            start: 40,
            end: 12,
        };
        assert_eq!(err.to_string(), "Shortcut 40->12 points the wrong way");
    }

    #[test]
    fn test_board_error_lifts_into_game_error() {
        let err: GameError = BoardError::DuplicateStart(16).into();
        assert!(matches!(
            err,
            GameError::Config(ConfigError::Board(BoardError::DuplicateStart(16)))
        ));
        assert_eq!(err.to_string(), "square 16 already has a connection");
    }
}
