//! High-level battle orchestrator.
//!
//! The runtime owns the [`BattleState`], asks the prompt provider for every
//! player decision, feeds the reducer, and renders the resulting events to
//! the output sink. It exposes a builder-based API so clients can swap any
//! collaborator.

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use game_core::{
    BattleEvent, BattleState, BattleStatus, Character, GameConfig, GameError, PcgRng, Player,
    PlayerAction, RngOracle, TurnOwner,
};

use crate::api::{
    BattleOutcome, Output, OutputSink, PromptProvider, PromptRequest, Result, RuntimeError,
};
use crate::prompts::{self, ActionChoice};
use crate::rng::EntropyRng;

/// Runtime configuration shared across the orchestrator.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Seed for deterministic replay. `None` draws from system entropy.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            seed: None,
            event_buffer_size: 100,
        }
    }
}

/// Main runtime that drives a single battle.
pub struct Runtime {
    config: RuntimeConfig,
    prompts: Box<dyn PromptProvider>,
    sink: Box<dyn OutputSink>,
    rng: Box<dyn RngOracle>,
    event_tx: broadcast::Sender<BattleEvent>,
    battle: Option<BattleState>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Subscribe to battle events as they are rendered.
    pub fn subscribe_events(&self) -> broadcast::Receiver<BattleEvent> {
        self.event_tx.subscribe()
    }

    /// The battle from the last call to [`Runtime::run`], including aborted
    /// ones.
    pub fn battle(&self) -> Option<&BattleState> {
        self.battle.as_ref()
    }

    /// Play one battle from the name prompt to a terminal status.
    ///
    /// If the prompt provider fails mid-battle the battle is marked aborted
    /// and the error is returned; nothing is retried.
    pub async fn run(&mut self) -> Result<BattleOutcome> {
        let enemies = BattleState::roster(&self.config.game_config, self.rng.as_mut());

        let name = self.ask(prompts::name_request()).await.inspect_err(|err| {
            error!(error = %err, "battle aborted before setup");
        })?;
        let player = Player::new(name.trim(), self.rng.as_mut());

        let mut state = BattleState::new(player, enemies)?;
        info!(
            player = %state.player().name(),
            enemies = state.enemies().len(),
            seed = ?self.config.seed,
            "battle starting"
        );

        let result = match state.begin() {
            Ok(events) => {
                self.render(&events);
                self.drive(&mut state).await
            }
            Err(err) => Err(err.into()),
        };

        let finished = match result {
            Ok(()) => Ok(BattleOutcome::from_state(&state)),
            Err(err) => {
                state.abort();
                match &err {
                    RuntimeError::Battle(inner) => error!(
                        error = %err,
                        code = inner.error_code(),
                        severity = inner.severity().as_str(),
                        round = state.round_number(),
                        "battle aborted"
                    ),
                    _ => error!(error = %err, round = state.round_number(), "battle aborted"),
                }
                Err(err)
            }
        };
        self.battle = Some(state);

        let outcome = finished?;
        info!(
            status = %outcome.status,
            rounds_cleared = outcome.rounds_cleared,
            health = outcome.player_stats.health,
            "battle finished"
        );
        Ok(outcome)
    }

    async fn drive(&mut self, state: &mut BattleState) -> Result<()> {
        while let Some(owner) = state.turn_owner() {
            let events = match owner {
                TurnOwner::Player => {
                    let action = self.choose_action(state).await?;
                    debug!(?action, round = state.round_number(), "player action");
                    state.player_turn(action, self.rng.as_mut())?
                }
                TurnOwner::Enemy => state.enemy_turn(self.rng.as_mut())?,
            };
            self.render(&events);
        }
        Ok(())
    }

    async fn choose_action(&self, state: &BattleState) -> Result<PlayerAction> {
        let answer = self.ask(prompts::action_request()).await?;
        match prompts::parse_action(&answer).inspect_err(|_| warn!(%answer, "unknown action"))? {
            ActionChoice::Attack => Ok(PlayerAction::Attack),
            ActionChoice::UsePotion => {
                let Some(potions) = state.player().inventory() else {
                    return Ok(PlayerAction::UsePotion(None));
                };
                let answer = self.ask(prompts::potion_request(potions)).await?;
                let index = prompts::parse_potion_choice(&answer)
                    .inspect_err(|_| warn!(%answer, "unknown potion choice"))?;
                Ok(PlayerAction::UsePotion(Some(index)))
            }
        }
    }

    async fn ask(&self, request: PromptRequest) -> Result<String> {
        debug!(message = %request.message, choices = request.choices.len(), "prompting");
        self.prompts.prompt(request).await
    }

    fn render(&self, events: &[BattleEvent]) {
        for event in events {
            debug!(%event, "battle event");
            let output = match event {
                BattleEvent::StatsShown(stats) => Output::Stats(*stats),
                BattleEvent::PlayerWon => Output::Outcome {
                    status: BattleStatus::PlayerWon,
                    message: event.to_string(),
                },
                BattleEvent::PlayerDefeated => Output::Outcome {
                    status: BattleStatus::PlayerDefeated,
                    message: event.to_string(),
                },
                other => Output::Line(other.to_string()),
            };
            self.sink.display(output);
            // No subscribers is fine.
            let _ = self.event_tx.send(event.clone());
        }
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    prompts: Option<Box<dyn PromptProvider>>,
    sink: Option<Box<dyn OutputSink>>,
    rng: Option<Box<dyn RngOracle>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            prompts: None,
            sink: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the prompt provider (required)
    pub fn prompts(mut self, prompts: impl PromptProvider + 'static) -> Self {
        self.prompts = Some(Box::new(prompts));
        self
    }

    /// Set the output sink (required)
    pub fn sink(mut self, sink: impl OutputSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Override the RNG oracle.
    ///
    /// Without an override the runtime uses [`PcgRng`] when
    /// [`RuntimeConfig::seed`] is set and [`EntropyRng`] otherwise.
    pub fn rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime
    pub fn build(self) -> Result<Runtime> {
        let prompts = self.prompts.ok_or(RuntimeError::MissingPromptProvider)?;
        let sink = self.sink.ok_or(RuntimeError::MissingOutputSink)?;

        let rng = match (self.rng, self.config.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => Box::new(PcgRng::new(seed)) as Box<dyn RngOracle>,
            (None, None) => Box::new(EntropyRng::from_entropy()),
        };

        let (event_tx, _event_rx) = broadcast::channel(self.config.event_buffer_size.max(1));

        Ok(Runtime {
            config: self.config,
            prompts,
            sink,
            rng,
            event_tx,
            battle: None,
        })
    }
}
