//! Asynchronous abstraction for sourcing player input.
//!
//! Runtime users plug in [`PromptProvider`] implementations so a battle can
//! run against a terminal, a scripted fixture, or any other front end.
use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::errors::{Result, RuntimeError};

/// How the answer to a prompt is expected to look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// Any text; the answer is passed through as typed.
    FreeText,
    /// Exactly one of [`PromptRequest::choices`], returned verbatim.
    SingleChoice,
}

/// A single question put to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptRequest {
    pub message: String,
    pub kind: PromptKind,
    pub choices: Vec<String>,
}

impl PromptRequest {
    pub fn free_text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: PromptKind::FreeText,
            choices: Vec::new(),
        }
    }

    pub fn single_choice(message: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            message: message.into(),
            kind: PromptKind::SingleChoice,
            choices,
        }
    }
}

/// Trait for answering the runtime's questions.
///
/// The runtime keeps at most one prompt outstanding and awaits it before
/// touching the battle again. Implementations return
/// [`RuntimeError::PromptClosed`] once no more input can arrive.
#[async_trait]
pub trait PromptProvider: Send + Sync {
    async fn prompt(&self, request: PromptRequest) -> Result<String>;
}

/// Prompt provider that replays a fixed list of answers.
///
/// Clones share the same script, so a test can keep one handle to inspect the
/// requests after handing the other to the runtime.
#[derive(Clone, Default)]
pub struct ScriptedPrompts {
    answers: Arc<Mutex<VecDeque<String>>>,
    asked: Arc<Mutex<Vec<PromptRequest>>>,
}

impl ScriptedPrompts {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().map(Into::into).collect())),
            asked: Arc::default(),
        }
    }

    /// Every request received so far, in order.
    pub async fn requests(&self) -> Vec<PromptRequest> {
        self.asked.lock().await.clone()
    }

    pub async fn remaining(&self) -> usize {
        self.answers.lock().await.len()
    }
}

#[async_trait]
impl PromptProvider for ScriptedPrompts {
    async fn prompt(&self, request: PromptRequest) -> Result<String> {
        self.asked.lock().await.push(request);
        self.answers
            .lock()
            .await
            .pop_front()
            .ok_or(RuntimeError::PromptClosed)
    }
}
