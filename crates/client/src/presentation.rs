//! Output sink that writes the battle to the terminal.
use std::io::{self, Write};

use crossterm::style::Stylize;
use game_core::{BattleStatus, PlayerStats};
use runtime::{Output, OutputSink};

pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn write(&self, output: &Output) -> io::Result<()> {
        let mut out = io::stdout().lock();
        match output {
            Output::Line(line) => writeln!(out, "{line}"),
            Output::Stats(stats) => self.write_stats(&mut out, stats),
            Output::Outcome { status, message } => {
                if !self.color {
                    return writeln!(out, "{message}");
                }
                let styled = match status {
                    BattleStatus::PlayerWon => message.as_str().green().bold(),
                    _ => message.as_str().red().bold(),
                };
                writeln!(out, "{styled}")
            }
        }
    }

    fn write_stats(&self, out: &mut impl Write, stats: &PlayerStats) -> io::Result<()> {
        let rows = [
            ("potions", stats.potions.to_string()),
            ("health", stats.health.to_string()),
            ("strength", stats.strength.to_string()),
            ("agility", stats.agility.to_string()),
        ];
        writeln!(out)?;
        for (label, value) in rows {
            if self.color {
                writeln!(out, "  {:<9} {}", label.dark_grey(), value.bold())?;
            } else {
                writeln!(out, "  {label:<9} {value}")?;
            }
        }
        writeln!(out)
    }
}

impl OutputSink for ConsoleSink {
    fn display(&self, output: Output) {
        if let Err(err) = self.write(&output) {
            tracing::warn!(error = %err, "failed to write to terminal");
        }
    }
}
