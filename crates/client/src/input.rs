//! Prompt provider backed by the terminal's standard input.
use std::io::Write;

use async_trait::async_trait;
use crossterm::style::Stylize;
use runtime::{PromptKind, PromptProvider, PromptRequest, RuntimeError};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

/// Reads one answer per line from stdin.
///
/// Choices can be answered by number or by their exact text; anything else
/// re-asks the same question. End of input closes the provider.
pub struct TerminalPrompt {
    lines: Mutex<Lines<BufReader<Stdin>>>,
    color: bool,
}

impl TerminalPrompt {
    pub fn new(color: bool) -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
            color,
        }
    }

    fn show(&self, request: &PromptRequest) -> std::io::Result<()> {
        let mut out = std::io::stdout().lock();
        if self.color {
            writeln!(out, "{} {}", "?".cyan().bold(), request.message.as_str().bold())?;
        } else {
            writeln!(out, "? {}", request.message)?;
        }
        for (index, choice) in request.choices.iter().enumerate() {
            writeln!(out, "  {}) {choice}", index + 1)?;
        }
        write!(out, "> ")?;
        out.flush()
    }
}

#[async_trait]
impl PromptProvider for TerminalPrompt {
    async fn prompt(&self, request: PromptRequest) -> runtime::Result<String> {
        let mut lines = self.lines.lock().await;

        loop {
            self.show(&request)
                .map_err(|err| RuntimeError::Prompt(err.to_string()))?;

            let line = lines
                .next_line()
                .await
                .map_err(|err| RuntimeError::Prompt(err.to_string()))?
                .ok_or(RuntimeError::PromptClosed)?;

            match request.kind {
                PromptKind::FreeText => return Ok(line.trim().to_string()),
                PromptKind::SingleChoice => match resolve_choice(&line, &request.choices) {
                    Some(choice) => return Ok(choice.to_string()),
                    None => {
                        tracing::warn!(answer = %line.trim(), prompt = %request.message, "invalid choice");
                        println!("Please pick one of the listed options.");
                    }
                },
            }
        }
    }
}

/// Maps a typed answer to one of `choices`, by 1-based number or by text.
fn resolve_choice<'a>(answer: &str, choices: &'a [String]) -> Option<&'a str> {
    let answer = answer.trim();
    if let Ok(number) = answer.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| choices.get(index))
            .map(String::as_str);
    }
    choices
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(answer))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choices() -> Vec<String> {
        vec!["Attack".to_string(), "Use potion".to_string()]
    }

    #[test]
    fn resolves_by_number() {
        assert_eq!(resolve_choice("1", &choices()), Some("Attack"));
        assert_eq!(resolve_choice(" 2 ", &choices()), Some("Use potion"));
        assert_eq!(resolve_choice("0", &choices()), None);
        assert_eq!(resolve_choice("3", &choices()), None);
    }

    #[test]
    fn resolves_by_text_ignoring_case() {
        assert_eq!(resolve_choice("attack", &choices()), Some("Attack"));
        assert_eq!(resolve_choice("USE POTION", &choices()), Some("Use potion"));
        assert_eq!(resolve_choice("run", &choices()), None);
    }

    #[test]
    fn potion_choices_resolve_to_their_label() {
        let potions = vec!["1: health".to_string(), "2: agility".to_string()];
        assert_eq!(resolve_choice("2", &potions), Some("2: agility"));
    }
}
