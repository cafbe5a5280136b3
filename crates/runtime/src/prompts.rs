//! Prompt wording and answer parsing for the battle loop.
//!
//! Potion choices are offered as `"<n>: <kind>"` with `n` counting from 1;
//! the answer is mapped back by taking the number before `": "`.
use game_core::Potion;

use crate::api::{PromptRequest, Result, RuntimeError};

pub const NAME_PROMPT: &str = "What is your name?";
pub const ACTION_PROMPT: &str = "What would you like to do?";
pub const POTION_PROMPT: &str = "Which potion would you like to use?";

pub const ATTACK_CHOICE: &str = "Attack";
pub const POTION_CHOICE: &str = "Use potion";

/// Player decision taken from the action prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionChoice {
    Attack,
    UsePotion,
}

pub fn name_request() -> PromptRequest {
    PromptRequest::free_text(NAME_PROMPT)
}

pub fn action_request() -> PromptRequest {
    PromptRequest::single_choice(
        ACTION_PROMPT,
        vec![ATTACK_CHOICE.to_string(), POTION_CHOICE.to_string()],
    )
}

pub fn potion_request(potions: &[Potion]) -> PromptRequest {
    let choices = potions
        .iter()
        .enumerate()
        .map(|(index, potion)| format!("{}: {}", index + 1, potion.kind()))
        .collect();
    PromptRequest::single_choice(POTION_PROMPT, choices)
}

pub fn parse_action(answer: &str) -> Result<ActionChoice> {
    match answer.trim() {
        ATTACK_CHOICE => Ok(ActionChoice::Attack),
        POTION_CHOICE => Ok(ActionChoice::UsePotion),
        _ => Err(unexpected(ACTION_PROMPT, answer)),
    }
}

/// Maps a `"<n>: <kind>"` answer to a zero-based inventory index.
///
/// Only the number is checked here; an index past the end of the inventory is
/// left for the inventory to reject.
pub fn parse_potion_choice(answer: &str) -> Result<usize> {
    let (number, _kind) = answer
        .trim()
        .split_once(": ")
        .ok_or_else(|| unexpected(POTION_PROMPT, answer))?;
    number
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| unexpected(POTION_PROMPT, answer))
}

fn unexpected(prompt: &str, answer: &str) -> RuntimeError {
    RuntimeError::UnexpectedChoice {
        prompt: prompt.to_string(),
        answer: answer.to_string(),
    }
}
