use core::fmt;

use crate::actor::PlayerStats;
use crate::item::Potion;

/// Something that happened during a battle transition, in order.
///
/// `Display` renders the narrative line shown to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattleEvent {
    /// Stats table shown at the start of every round.
    StatsShown(PlayerStats),
    EnemyAppeared {
        round: usize,
        description: String,
        player_first: bool,
    },
    PlayerAttacked {
        enemy: String,
        damage: u32,
    },
    EnemyAttacked {
        enemy: String,
        damage: u32,
    },
    /// Health readout of whoever was just hit.
    HealthReported(String),
    PotionUsed(Potion),
    NoPotions,
    EnemyDefeated {
        enemy: String,
    },
    RewardClaimed(Potion),
    PlayerWon,
    PlayerDefeated,
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatsShown(stats) => write!(
                f,
                "potions: {} | health: {} | strength: {} | agility: {}",
                stats.potions, stats.health, stats.strength, stats.agility
            ),
            Self::EnemyAppeared { description, .. } => f.write_str(description),
            Self::PlayerAttacked { enemy, damage } => {
                write!(f, "You attacked the {enemy} for {damage} damage!")
            }
            Self::EnemyAttacked { enemy, damage } => {
                write!(f, "You were attacked by the {enemy} for {damage} damage!")
            }
            Self::HealthReported(description) => f.write_str(description),
            // Each potion kind is named after the stat it raises.
            Self::PotionUsed(potion) => write!(
                f,
                "You used a {kind} potion. (+{} {kind})",
                potion.magnitude(),
                kind = potion.kind()
            ),
            Self::NoPotions => f.write_str("You don't have any potions!"),
            Self::EnemyDefeated { enemy } => write!(f, "You've defeated the {enemy}!"),
            Self::RewardClaimed(potion) => write!(f, "You found a {} potion.", potion.kind()),
            Self::PlayerWon => f.write_str("You win!"),
            Self::PlayerDefeated => f.write_str("You've been defeated!"),
        }
    }
}
