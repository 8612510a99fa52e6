//! Game state aggregate.
//!
//! `GameState` owns the players, turn pointer, last die value, rolling
//! flag, winner, event history, and the commentary slot. A reset replaces
//! the whole value; during play it changes only through
//! [`GameState::begin_rolling`] and [`GameState::apply`].

use im::Vector;
use serde::Serialize;

use super::event::GameEvent;
use super::player::{Player, PlayerId, PlayerProfile};
use crate::board::Square;
use crate::commentary::CommentarySlot;
use crate::rules::Resolution;

/// Derived turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TurnPhase {
    /// Waiting for the current player to roll.
    Idle,
    /// A roll is pending; further rolls are ignored.
    Rolling,
    /// A winner is declared. Only a reset leaves this phase.
    Finished,
}

/// The aggregate root of one game.
///
/// Uses an `im::Vector` for history so snapshots clone in O(1).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    players: Vec<Player>,
    current_player_index: usize,
    die_value: Option<u8>,
    is_rolling: bool,
    winner: Option<PlayerId>,
    history: Vector<GameEvent>,
    commentary: CommentarySlot,
}

impl GameState {
    /// Fresh game: every player on square 1, player 0 to move, history
    /// holding only `start`.
    #[must_use]
    pub fn new(roster: &[PlayerProfile], start: GameEvent, banner: impl Into<String>) -> Self {
        assert!(!roster.is_empty(), "Must have at least 1 player");

        Self {
            players: roster.iter().map(|p| p.spawn(1)).collect(),
            current_player_index: 0,
            die_value: None,
            is_rolling: false,
            winner: None,
            history: Vector::unit(start),
            commentary: CommentarySlot::new(banner),
        }
    }

    // === Players ===

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Index of `id` in turn order.
    #[must_use]
    pub fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Position of `id`, if present.
    #[must_use]
    pub fn position_of(&self, id: PlayerId) -> Option<Square> {
        self.player(id).map(|p| p.position)
    }

    /// Move a player directly, bypassing the rules. Used to stage
    /// scenarios. Returns false for an unknown id.
    pub fn place_player(&mut self, id: PlayerId, square: Square) -> bool {
        match self.players.iter_mut().find(|p| p.id == id) {
            Some(player) => {
                player.position = square;
                true
            }
            None => false,
        }
    }

    // === Turn ===

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// Last die value; `None` before the first roll of a game.
    #[must_use]
    pub fn die_value(&self) -> Option<u8> {
        self.die_value
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.is_rolling
    }

    #[must_use]
    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        if self.winner.is_some() {
            TurnPhase::Finished
        } else if self.is_rolling {
            TurnPhase::Rolling
        } else {
            TurnPhase::Idle
        }
    }

    // === History ===

    #[must_use]
    pub fn history(&self) -> &Vector<GameEvent> {
        &self.history
    }

    #[must_use]
    pub fn last_event(&self) -> Option<&GameEvent> {
        self.history.last()
    }

    // === Commentary ===

    /// Latest commentary text.
    #[must_use]
    pub fn commentary(&self) -> String {
        self.commentary.get()
    }

    /// Shared slot that background commentary tasks write into.
    #[must_use]
    pub fn commentary_slot(&self) -> &CommentarySlot {
        &self.commentary
    }

    // === Transitions ===

    /// Lock the state for a pending roll.
    pub fn begin_rolling(&mut self) {
        self.is_rolling = true;
    }

    /// Commit a resolved move in one step: position, turn pointer, die
    /// value, rolling flag, winner, and history.
    ///
    /// The first winner sticks; only a new game clears it.
    pub fn apply(&mut self, resolution: &Resolution) {
        if let Some(player) = self.players.iter_mut().find(|p| p.id == resolution.player) {
            player.position = resolution.position;
        }
        self.current_player_index = resolution.next_index;
        self.is_rolling = false;
        self.die_value = Some(resolution.steps);
        if let Some(winner) = resolution.winner {
            self.winner.get_or_insert(winner);
        }
        if let Some(event) = &resolution.event {
            self.history.push_back(event.clone());
        }
    }
}
