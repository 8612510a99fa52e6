//! Turn history records.
//!
//! Every resolved turn appends one [`GameEvent`]. Events are never edited
//! or removed; a reset starts a new history with a single `Start` event.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::player::PlayerId;
use crate::board::{ConnectionKind, Square};

/// What happened on a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    /// Synthetic first entry of every game.
    Start,
    /// Plain move, no connection.
    Normal,
    /// Landed on a shortcut and rode it forward.
    Shortcut,
    /// Landed on a setback and fell back.
    Setback,
    /// Reached the final square.
    Win,
}

impl EventKind {
    /// Upper-case label used in prompts and logs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EventKind::Start => "START",
            EventKind::Normal => "NORMAL",
            EventKind::Shortcut => "SHORTCUT",
            EventKind::Setback => "SETBACK",
            EventKind::Win => "WIN",
        }
    }
}

impl From<ConnectionKind> for EventKind {
    fn from(kind: ConnectionKind) -> Self {
        match kind {
            ConnectionKind::Shortcut => EventKind::Shortcut,
            ConnectionKind::Setback => EventKind::Setback,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One completed turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    pub kind: EventKind,
    /// Acting player. `None` for `Start`.
    pub player: Option<PlayerId>,
    /// Die value of the turn. `None` for `Start`.
    pub roll: Option<u8>,
    /// Square before the roll.
    pub from: Square,
    /// Square after following any connection.
    pub to: Square,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl GameEvent {
    /// The synthetic event that opens a game.
    pub fn start(message: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Start,
            player: None,
            roll: None,
            from: 0,
            to: 1,
            message: message.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// A resolved turn, stamped now.
    pub fn turn(
        kind: EventKind,
        player: PlayerId,
        roll: u8,
        from: Square,
        to: Square,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            player: Some(player),
            roll: Some(roll),
            from,
            to,
            message: message.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_event() {
        let event = GameEvent::start("Welcome to the Nexus.");
        assert_eq!(event.kind, EventKind::Start);
        assert_eq!(event.player, None);
        assert_eq!(event.from, 0);
        assert_eq!(event.to, 1);
    }

    #[test]
    fn test_kind_from_connection() {
        assert_eq!(EventKind::from(ConnectionKind::Shortcut), EventKind::Shortcut);
        assert_eq!(EventKind::from(ConnectionKind::Setback), EventKind::Setback);
    }

    #[test]
    fn test_event_json() {
        let event = GameEvent::turn(EventKind::Win, PlayerId::new(2), 6, 94, 100, "done");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["kind"], "WIN");
        assert_eq!(json["player"], 2);
        assert_eq!(json["from"], 94);
        assert_eq!(json["to"], 100);
        assert!(json["timestamp"].is_string());
    }
}
