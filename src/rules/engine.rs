//! Rules engine trait.
//!
//! A rules engine turns "player X moves N steps" into a [`Resolution`]
//! without touching the state. The session then commits the resolution in
//! one step with [`GameState::apply`].

use crate::board::{Board, Square};
use crate::core::event::GameEvent;
use crate::core::player::PlayerId;
use crate::core::state::GameState;

/// Fully computed outcome of one move, ready to commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Player that moved.
    pub player: PlayerId,
    /// Die value.
    pub steps: u8,
    /// Square reached by the die alone, before any connection. Equal to
    /// the starting square on an overshoot.
    pub landed: Square,
    /// Final square after following any connection.
    pub position: Square,
    /// Turn pointer after the move.
    pub next_index: usize,
    /// History entry, if this move is logged.
    pub event: Option<GameEvent>,
    /// Set when the move wins the game.
    pub winner: Option<PlayerId>,
    /// The roll would have passed the final square; the player stayed put.
    pub overshot: bool,
}

impl Resolution {
    /// True when the roll overshot the final square and the player did
    /// not move.
    #[must_use]
    pub fn is_overshoot(&self) -> bool {
        self.overshot
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        self.winner.is_some()
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `resolve_move` must not depend on anything but its inputs so a move
///   can be replayed.
/// - Return `None` for an unknown player; the session leaves the state
///   untouched in that case.
pub trait RulesEngine {
    /// Board the rules play on.
    fn board(&self) -> &Board;

    /// Resolve `player` moving `steps` squares against `state`.
    fn resolve_move(&self, state: &GameState, player: PlayerId, steps: u8) -> Option<Resolution>;

    /// Winner of the game, if any.
    fn winner(&self, state: &GameState) -> Option<PlayerId> {
        state.winner_id()
    }

    /// Whether `square` ends the game.
    fn is_winning_square(&self, square: Square) -> bool {
        square == self.board().final_square()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EventKind;

    #[test]
    fn test_overshoot_detection() {
        let stay = Resolution {
            player: PlayerId::new(1),
            steps: 5,
            landed: 97,
            position: 97,
            next_index: 0,
            event: None,
            winner: None,
            overshot: true,
        };
        assert!(stay.is_overshoot());
        assert!(!stay.is_win());

        let moved = Resolution {
            player: PlayerId::new(1),
            steps: 3,
            landed: 4,
            position: 4,
            next_index: 1,
            event: Some(GameEvent::turn(EventKind::Normal, PlayerId::new(1), 3, 1, 4, "m")),
            winner: None,
            overshot: false,
        };
        assert!(!moved.is_overshoot());
    }
}
