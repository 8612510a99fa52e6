//! Commentary generator trait and the offline implementation.

use async_trait::async_trait;
use serde::Serialize;

use crate::board::Square;
use crate::core::event::{EventKind, GameEvent};
use crate::error::CommentaryError;

/// What the commentator is told about a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommentaryRequest {
    pub kind: EventKind,
    pub from: Square,
    pub to: Square,
    pub player_name: String,
}

impl CommentaryRequest {
    pub fn new(kind: EventKind, from: Square, to: Square, player_name: impl Into<String>) -> Self {
        Self {
            kind,
            from,
            to,
            player_name: player_name.into(),
        }
    }

    /// Build a request from a logged event.
    pub fn from_event(event: &GameEvent, player_name: impl Into<String>) -> Self {
        Self::new(event.kind, event.from, event.to, player_name)
    }

    /// Themed prompt for a text-generation model.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "You are the AI System Voice for \"Neon Nexus: 2099\", a futuristic version of Snake and Ladders.\n\
             Event: {}\n\
             Player: {}\n\
             Details: Moved from {} to {}.\n\
             \n\
             Generate a short, cool, immersive, futuristic commentary for this move.\n\
             Use terms like 'Hyper-loop', 'Quantum Tunneling', 'Neural De-sync', 'Grid stability', 'Protocol'.\n\
             Keep it under 20 words. No emojis.",
            self.kind.label(),
            self.player_name,
            self.from,
            self.to,
        )
    }
}

/// Source of flavor text for moves.
///
/// Implementations may be slow or fail; callers go through
/// [`super::commentary_or_fallback`] so failures never reach game logic.
#[async_trait]
pub trait CommentaryGenerator: Send + Sync {
    /// Short, single-line commentary for `request`.
    async fn generate(&self, request: &CommentaryRequest) -> Result<String, CommentaryError>;

    /// Name used in logs.
    fn name(&self) -> &'static str;
}

/// Offline commentator with fixed lines per event kind.
#[derive(Clone, Copy, Debug, Default)]
pub struct CannedCommentator;

#[async_trait]
impl CommentaryGenerator for CannedCommentator {
    async fn generate(&self, request: &CommentaryRequest) -> Result<String, CommentaryError> {
        let name = &request.player_name;
        let line = match request.kind {
            EventKind::Start => "Grid stability nominal. Protocol engaged.".to_string(),
            EventKind::Normal => {
                format!("{name} advances to sector {}. Grid stability holding.", request.to)
            }
            EventKind::Shortcut => format!(
                "Hyper-loop engaged! {name} tunnels from {} to {}.",
                request.from, request.to
            ),
            EventKind::Setback => {
                format!("Neural De-sync detected. {name} drops to sector {}.", request.to)
            }
            EventKind::Win => format!("Protocol complete. {name} has breached the Nexus."),
        };
        Ok(line)
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}
