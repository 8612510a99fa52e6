//! Game session controller.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::commentary::{CommentaryDispatcher, CommentaryRequest};
use crate::core::config::GameConfig;
use crate::core::event::{EventKind, GameEvent};
use crate::core::player::PlayerId;
use crate::core::rng::{DieRoller, SeededDie};
use crate::core::state::{GameState, TurnPhase};
use crate::error::GameError;
use crate::rules::{ClassicRules, Resolution, RulesEngine};

/// A die value drawn by [`GameSession::begin_roll`] and not yet resolved.
///
/// Only the most recent pending roll of the current game can be completed.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct PendingRoll {
    player: PlayerId,
    value: u8,
    epoch: u64,
}

impl PendingRoll {
    /// Player the roll belongs to.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Die value.
    pub fn value(&self) -> u8 {
        self.value
    }
}

/// Owns one game and drives it.
///
/// Every transition takes `&mut self`, so at most one roll or reset is in
/// flight. Commentary runs as detached tokio tasks that only write into the
/// current game's commentary slot.
pub struct GameSession {
    config: GameConfig,
    rules: ClassicRules,
    state: GameState,
    die: Box<dyn DieRoller>,
    roll_epoch: u64,
    commentary: Option<CommentaryDispatcher>,
    commentary_tasks: Vec<JoinHandle<()>>,
}

impl GameSession {
    /// New session with a ChaCha8 die, seeded from `config.seed` or OS
    /// entropy.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let die = match config.seed {
            Some(seed) => SeededDie::new(seed),
            None => {
                let die = SeededDie::from_entropy();
                info!(seed = die.seed(), "session.seed");
                die
            }
        };
        Self::with_die(config, die)
    }

    /// New session with a custom die.
    pub fn with_die(config: GameConfig, die: impl DieRoller + 'static) -> Result<Self, GameError> {
        config.validate()?;
        let state = GameState::new(
            &config.roster,
            GameEvent::start(config.welcome_message.clone()),
            config.welcome_banner.clone(),
        );
        Ok(Self::assemble(config, state, Box::new(die)))
    }

    /// Session that continues from a prepared state, e.g. a staged
    /// scenario. Every player must be in the roster and on the track.
    pub fn from_state(
        config: GameConfig,
        state: GameState,
        die: impl DieRoller + 'static,
    ) -> Result<Self, GameError> {
        config.validate()?;
        config.validate_state(&state)?;
        Ok(Self::assemble(config, state, Box::new(die)))
    }

    fn assemble(config: GameConfig, state: GameState, die: Box<dyn DieRoller>) -> Self {
        Self {
            rules: ClassicRules::from_config(&config),
            config,
            state,
            die,
            roll_epoch: 0,
            commentary: None,
            commentary_tasks: Vec::new(),
        }
    }

    /// Attach a commentator. Without one, the commentary slot keeps its
    /// banner text.
    #[must_use]
    pub fn with_commentary(mut self, dispatcher: CommentaryDispatcher) -> Self {
        self.commentary = Some(dispatcher);
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &ClassicRules {
        &self.rules
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.rules.board()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.state.phase()
    }

    /// JSON snapshot for presentation layers.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.state)
    }

    // === Rolling ===

    /// Lock the game and draw a die value for the current player.
    ///
    /// Returns `None` without touching state unless the game is `Idle`.
    pub fn begin_roll(&mut self) -> Option<PendingRoll> {
        let phase = self.state.phase();
        if phase != TurnPhase::Idle {
            debug!(?phase, "roll.ignored");
            return None;
        }

        self.state.begin_rolling();
        self.roll_epoch += 1;
        let value = self.die.roll(self.config.die_faces);
        let player = self.state.current_player().id;
        debug!(%player, value, "roll.begin");

        Some(PendingRoll {
            player,
            value,
            epoch: self.roll_epoch,
        })
    }

    /// Resolve a roll drawn by [`GameSession::begin_roll`].
    ///
    /// A roll from before a reset, or one already completed, is ignored.
    pub fn complete_roll(&mut self, pending: PendingRoll) -> Option<Resolution> {
        if pending.epoch != self.roll_epoch || !self.state.is_rolling() {
            debug!(player = %pending.player, "roll.stale");
            return None;
        }
        self.resolve_move(pending.player, pending.value)
    }

    /// Roll and resolve immediately.
    pub fn request_roll(&mut self) -> Option<Resolution> {
        let pending = self.begin_roll()?;
        self.complete_roll(pending)
    }

    /// Roll, wait `delay` with the game locked, then resolve.
    pub async fn request_roll_after(&mut self, delay: Duration) -> Option<Resolution> {
        let pending = self.begin_roll()?;
        tokio::time::sleep(delay).await;
        self.complete_roll(pending)
    }

    // === Moves ===

    /// Move `player` by `steps` and commit the result.
    ///
    /// A finished game or an unknown player leaves the state untouched and
    /// returns `None`.
    pub fn resolve_move(&mut self, player: PlayerId, steps: u8) -> Option<Resolution> {
        if self.state.phase() == TurnPhase::Finished {
            debug!(%player, steps, "move.ignored_finished");
            return None;
        }

        let Some(resolution) = self.rules.resolve_move(&self.state, player, steps) else {
            warn!(%player, steps, "move.unknown_player");
            return None;
        };

        self.state.apply(&resolution);

        match &resolution.event {
            Some(event) => {
                info!(
                    %player,
                    steps,
                    from = event.from,
                    to = event.to,
                    kind = %event.kind,
                    "move.resolved"
                );
                if event.kind == EventKind::Win {
                    info!(%player, "game.won");
                }
                self.dispatch_commentary(event);
            }
            None => debug!(%player, steps, position = resolution.position, "move.overshoot"),
        }

        Some(resolution)
    }

    /// Start a new game. Always allowed.
    pub fn reset(&mut self) {
        self.state = GameState::new(
            &self.config.roster,
            GameEvent::start(self.config.reset_message.clone()),
            self.config.reset_banner.clone(),
        );
        self.roll_epoch += 1;
        // Tasks from the old game keep running but write into the old slot.
        self.commentary_tasks.clear();
        info!("session.reset");
    }

    // === Commentary ===

    fn dispatch_commentary(&mut self, event: &GameEvent) {
        let Some(dispatcher) = &self.commentary else {
            return;
        };
        let Some(name) = event
            .player
            .and_then(|id| self.state.player(id))
            .map(|p| p.name.clone())
        else {
            return;
        };

        self.commentary_tasks.retain(|task| !task.is_finished());
        let task = dispatcher.dispatch(
            CommentaryRequest::from_event(event, name),
            self.state.commentary_slot().clone(),
        );
        self.commentary_tasks.push(task);
    }

    /// Number of commentary tasks started for this game and not yet
    /// awaited.
    #[must_use]
    pub fn pending_commentary(&self) -> usize {
        self.commentary_tasks.len()
    }

    /// Wait for every outstanding commentary task of this game.
    pub async fn flush_commentary(&mut self) {
        for task in self.commentary_tasks.drain(..) {
            if let Err(err) = task.await {
                warn!(error = %err, "commentary.task_failed");
            }
        }
    }
}
