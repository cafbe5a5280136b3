//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the prompt provider and the battle reducer so clients
//! can bubble them up with consistent context.
use game_core::BattleError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("prompt provider closed before the battle finished")]
    PromptClosed,

    #[error("prompt provider failed: {0}")]
    Prompt(String),

    #[error("answer {answer:?} does not match any choice offered by {prompt:?}")]
    UnexpectedChoice { prompt: String, answer: String },

    #[error("runtime requires a prompt provider before building")]
    MissingPromptProvider,

    #[error("runtime requires an output sink before building")]
    MissingOutputSink,

    #[error(transparent)]
    Battle(#[from] BattleError),
}

impl RuntimeError {
    /// Returns true if the failure came from the input side rather than the
    /// battle rules.
    pub fn is_input_failure(&self) -> bool {
        matches!(
            self,
            Self::PromptClosed | Self::Prompt(_) | Self::UnexpectedChoice { .. }
        )
    }
}
