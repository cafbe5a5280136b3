//! Output side of the runtime: where narrative lines and stat tables go.
use std::sync::{Arc, Mutex, PoisonError};

use game_core::{BattleStatus, PlayerStats};

/// Something the runtime wants shown to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// One narrative line.
    Line(String),
    /// Tabular snapshot of the player's stats.
    Stats(PlayerStats),
    /// Final line of a finished battle.
    Outcome { status: BattleStatus, message: String },
}

impl Output {
    /// Text form of the output, if it has one.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Line(line) | Self::Outcome { message: line, .. } => Some(line),
            Self::Stats(_) => None,
        }
    }
}

/// Fire-and-forget display collaborator.
pub trait OutputSink: Send + Sync {
    fn display(&self, output: Output);
}

/// Output sink that records everything in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    outputs: Arc<Mutex<Vec<Output>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outputs(&self) -> Vec<Output> {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Text of every line-like output, in order.
    pub fn lines(&self) -> Vec<String> {
        self.outputs()
            .iter()
            .filter_map(Output::text)
            .map(str::to_owned)
            .collect()
    }

    pub fn contains_line(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl OutputSink for MemorySink {
    fn display(&self, output: Output) {
        self.outputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(output);
    }
}
