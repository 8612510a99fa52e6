//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use nexus_grid::{GameConfig, GameEvent, GameSession, GameState, PlayerId, ScriptedDie, Square};

static INITIALIZED: OnceCell<()> = OnceCell::new();

pub const P1: PlayerId = PlayerId::new(1);
pub const P2: PlayerId = PlayerId::new(2);

/// Initialize test logging once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then "warn".
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Classic session whose die replays `rolls`.
pub fn scripted(rolls: Vec<u8>) -> GameSession {
    scripted_with(GameConfig::new(), rolls)
}

pub fn scripted_with(config: GameConfig, rolls: Vec<u8>) -> GameSession {
    init_logging();
    GameSession::with_die(config, ScriptedDie::new(rolls)).unwrap()
}

/// Classic session with player 1 staged on `square`, player 1 to move.
pub fn staged(square: Square, rolls: Vec<u8>) -> GameSession {
    staged_with(GameConfig::new(), square, rolls)
}

pub fn staged_with(config: GameConfig, square: Square, rolls: Vec<u8>) -> GameSession {
    staged_all(config, &[(P1, square)], rolls)
}

/// Classic session with each listed player staged on its square, player 1
/// to move.
pub fn staged_all(
    config: GameConfig,
    squares: &[(PlayerId, Square)],
    rolls: Vec<u8>,
) -> GameSession {
    init_logging();
    let mut state = GameState::new(&config.roster, GameEvent::start("staged"), "staged");
    for &(player, square) in squares {
        state.place_player(player, square);
    }
    GameSession::from_state(config, state, ScriptedDie::new(rolls)).unwrap()
}
