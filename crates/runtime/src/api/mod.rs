//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the orchestrator can stay focused on driving the battle.

pub mod errors;
pub mod outcome;
pub mod output;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use outcome::BattleOutcome;
pub use output::{MemorySink, Output, OutputSink};
pub use providers::{PromptKind, PromptProvider, PromptRequest, ScriptedPrompts};
