//! Classic snakes-and-ladders rules.
//!
//! 1. Advance by the die value.
//! 2. A roll past the final square is an overshoot (see [`OvershootPolicy`]).
//! 3. Landing on a connection's start square follows it.
//! 4. Ending on the final square wins, however it was reached.
//! 5. The turn passes to the next seat unless the move won.

use crate::board::{Board, Square};
use crate::core::config::{GameConfig, OvershootPolicy};
use crate::core::event::{EventKind, GameEvent};
use crate::core::player::{Player, PlayerId};
use crate::core::state::GameState;

use super::engine::{Resolution, RulesEngine};

/// Classic rules over any validated board.
#[derive(Clone, Debug)]
pub struct ClassicRules {
    board: Board,
    overshoot: OvershootPolicy,
}

impl ClassicRules {
    #[must_use]
    pub fn new(board: Board, overshoot: OvershootPolicy) -> Self {
        Self { board, overshoot }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board.clone(), config.overshoot)
    }

    #[must_use]
    pub fn overshoot_policy(&self) -> OvershootPolicy {
        self.overshoot
    }

    fn resolve_overshoot(&self, state: &GameState, player: &Player, steps: u8) -> Resolution {
        let current = state.current_player_index();
        let (next_index, event) = match self.overshoot {
            OvershootPolicy::StayPut => (current, None),
            OvershootPolicy::ForfeitTurn => {
                let message = format!(
                    "{} overshot the Nexus and holds at {}",
                    player.name, player.position
                );
                let event = GameEvent::turn(
                    EventKind::Normal,
                    player.id,
                    steps,
                    player.position,
                    player.position,
                    message,
                );
                (next_seat(state), Some(event))
            }
        };

        Resolution {
            player: player.id,
            steps,
            landed: player.position,
            position: player.position,
            next_index,
            event,
            winner: None,
            overshot: true,
        }
    }
}

impl RulesEngine for ClassicRules {
    fn board(&self) -> &Board {
        &self.board
    }

    fn resolve_move(&self, state: &GameState, player: PlayerId, steps: u8) -> Option<Resolution> {
        let mover = state.player(player)?;
        let from = mover.position;

        let tentative = u16::from(from) + u16::from(steps);
        if tentative > u16::from(self.board.final_square()) {
            return Some(self.resolve_overshoot(state, mover, steps));
        }
        let landed = tentative as Square;

        let (mut kind, position) = match self.board.connection_at(landed) {
            Some(conn) => (EventKind::from(conn.kind), conn.end),
            None => (EventKind::Normal, landed),
        };
        if self.is_winning_square(position) {
            kind = EventKind::Win;
        }

        let message = describe(kind, &mover.name, landed, position);
        let event = GameEvent::turn(kind, player, steps, landed - steps, position, message);

        let won = kind == EventKind::Win;
        let next_index = if won {
            state.current_player_index()
        } else {
            next_seat(state)
        };

        Some(Resolution {
            player,
            steps,
            landed,
            position,
            next_index,
            event: Some(event),
            winner: won.then_some(player),
            overshot: false,
        })
    }
}

fn next_seat(state: &GameState) -> usize {
    (state.current_player_index() + 1) % state.player_count()
}

/// Protocol-log line for a move.
fn describe(kind: EventKind, name: &str, landed: Square, to: Square) -> String {
    match kind {
        EventKind::Shortcut => format!("{name} rode a hyper-loop from {landed} to {to}"),
        EventKind::Setback => format!("{name} hit a neural de-sync at {landed}, dropped to {to}"),
        EventKind::Win => format!("{name} breached the Nexus at {to}"),
        EventKind::Normal | EventKind::Start => format!("{name} moved to {to}"),
    }
}
