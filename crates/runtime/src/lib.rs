//! Runtime orchestration for turn-based battles.
//!
//! This crate wires the prompt provider and output sink abstractions around
//! the pure [`game_core::BattleState`] reducer. Consumers embed [`Runtime`]
//! to play a battle and subscribe to its events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`prompts`] holds prompt wording and answer parsing
//! - [`rng`] provides the entropy-backed RNG oracle
pub mod api;
pub mod prompts;
pub mod rng;
pub mod runtime;

pub use api::{
    BattleOutcome, MemorySink, Output, OutputSink, PromptKind, PromptProvider, PromptRequest,
    Result, RuntimeError, ScriptedPrompts,
};
pub use rng::EntropyRng;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
