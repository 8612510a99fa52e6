//! Property tests for turn resolution on the classic board.

mod common;

use common::{staged, staged_all, P1, P2};
use nexus_grid::{Board, EventKind, GameConfig, GameSession, ScriptedDie, TurnPhase};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_overshoot_changes_nothing_but_the_die(start in 95u8..100, roll in 1u8..=6) {
        prop_assume!(start + roll > 100);
        let mut session = staged(start, vec![roll]);

        let result = session.request_roll().unwrap();

        prop_assert!(result.is_overshoot());
        let state = session.state();
        prop_assert_eq!(state.position_of(P1), Some(start));
        prop_assert_eq!(state.history().len(), 1);
        prop_assert_eq!(state.current_player_index(), 0);
        prop_assert_eq!(state.die_value(), Some(roll));
        prop_assert!(!state.is_rolling());
    }

    #[test]
    fn prop_second_seat_overshoot_changes_nothing_but_the_die(start in 95u8..100, roll in 1u8..=6) {
        prop_assume!(start + roll > 100);
        // Player 1 steps 3 -> 4 first, handing the turn to player 2.
        let mut session = staged_all(GameConfig::new(), &[(P1, 3), (P2, start)], vec![1, roll]);
        session.request_roll().unwrap();
        let history_len = session.state().history().len();

        let result = session.request_roll().unwrap();

        prop_assert!(result.is_overshoot());
        prop_assert_eq!(result.player, P2);
        let state = session.state();
        prop_assert_eq!(state.position_of(P2), Some(start));
        prop_assert_eq!(state.position_of(P1), Some(4));
        prop_assert_eq!(state.history().len(), history_len);
        prop_assert_eq!(state.current_player_index(), 1);
        prop_assert_eq!(state.die_value(), Some(roll));
        prop_assert!(!state.is_rolling());
    }

    #[test]
    fn prop_landing_on_connection_redirects(start in 1u8..94, roll in 1u8..=6) {
        let board = Board::classic();
        let landed = start + roll;
        let mut session = staged(start, vec![roll]);

        let result = session.request_roll().unwrap();
        let event = result.event.clone().unwrap();

        prop_assert_eq!(event.from, start);
        match board.connection_at(landed) {
            Some(connection) => {
                prop_assert_eq!(result.position, connection.end);
                prop_assert_eq!(event.to, connection.end);
                if connection.end != board.final_square() {
                    prop_assert_eq!(event.kind, EventKind::from(connection.kind));
                }
            }
            None => {
                prop_assert_eq!(result.position, landed);
                prop_assert_eq!(event.kind, EventKind::Normal);
            }
        }
    }

    #[test]
    fn prop_rolls_stay_on_board(rolls in proptest::collection::vec(1u8..=6, 1..200)) {
        let mut session = GameSession::with_die(GameConfig::new(), ScriptedDie::new(rolls.clone())).unwrap();

        for _ in 0..rolls.len() {
            if session.request_roll().is_none() {
                break;
            }
            for player in session.state().players() {
                prop_assert!((1..=100).contains(&player.position));
            }
        }
    }

    #[test]
    fn prop_turn_advances_modulo_roster(rolls in proptest::collection::vec(1u8..=6, 1..60)) {
        let mut session = GameSession::with_die(GameConfig::new(), ScriptedDie::new(rolls.clone())).unwrap();

        for _ in 0..rolls.len() {
            let before = session.state().current_player_index();
            let Some(result) = session.request_roll() else { break };
            let after = session.state().current_player_index();

            if result.is_win() || result.is_overshoot() {
                prop_assert_eq!(after, before);
            } else {
                prop_assert_eq!(after, (before + 1) % session.state().player_count());
            }
        }
    }

    #[test]
    fn prop_history_grows_one_per_committed_move(rolls in proptest::collection::vec(1u8..=6, 1..120)) {
        let mut session = GameSession::with_die(GameConfig::new(), ScriptedDie::new(rolls.clone())).unwrap();

        for _ in 0..rolls.len() {
            let before = session.state().history().len();
            let Some(result) = session.request_roll() else { break };
            let grew = session.state().history().len() - before;

            prop_assert_eq!(grew, usize::from(result.event.is_some()));
            prop_assert_eq!(session.state().history().front().map(|e| e.kind), Some(EventKind::Start));
        }
    }

    #[test]
    fn prop_winner_freezes_game(rolls in proptest::collection::vec(1u8..=6, 1..40)) {
        let mut session = staged(94, vec![6]);
        session.request_roll().unwrap();
        let frozen = session.snapshot_json().unwrap();

        for _ in rolls {
            prop_assert!(session.request_roll().is_none());
        }

        prop_assert_eq!(session.phase(), TurnPhase::Finished);
        prop_assert_eq!(session.snapshot_json().unwrap(), frozen);
    }
}
