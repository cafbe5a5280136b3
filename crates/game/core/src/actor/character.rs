//! Shared combat capability for the player and enemies.
//!
//! Player and Enemy both embed a [`CharacterStats`] record and expose it
//! through [`Character`]; every combat rule lives in the trait's provided
//! methods so the two types cannot drift apart.

use crate::config::GameConfig;
use crate::env::RngOracle;

/// Identity and vital stats common to every combatant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterStats {
    pub name: String,
    /// Current health. Never negative; may exceed the starting roll after
    /// health potions.
    pub health: u32,
    pub strength: u32,
    pub agility: u32,
}

impl CharacterStats {
    pub fn new(name: impl Into<String>, health: u32, strength: u32, agility: u32) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            agility,
        }
    }

    /// Rolls fresh stats: health in `[95, 104]`, strength and agility in
    /// `[7, 11]`.
    pub fn roll(name: impl Into<String>, rng: &mut (impl RngOracle + ?Sized)) -> Self {
        let health = rng.range(GameConfig::HEALTH_MIN, GameConfig::HEALTH_MAX);
        let strength = rng.range(GameConfig::STRENGTH_MIN, GameConfig::STRENGTH_MAX);
        let agility = rng.range(GameConfig::AGILITY_MIN, GameConfig::AGILITY_MAX);
        Self::new(name, health, strength, agility)
    }
}

/// Combat capability shared by [`crate::Player`] and [`crate::Enemy`].
pub trait Character {
    fn stats(&self) -> &CharacterStats;

    fn stats_mut(&mut self) -> &mut CharacterStats;

    fn name(&self) -> &str {
        &self.stats().name
    }

    fn health(&self) -> u32 {
        self.stats().health
    }

    fn strength(&self) -> u32 {
        self.stats().strength
    }

    fn agility(&self) -> u32 {
        self.stats().agility
    }

    fn is_alive(&self) -> bool {
        self.stats().health > 0
    }

    fn describe_health(&self) -> String {
        let stats = self.stats();
        format!("{}'s health is now {}!", stats.name, stats.health)
    }

    /// Rolls an attack in `[strength - 5, strength + 5)`.
    ///
    /// The lower bound saturates at zero for characters weaker than the
    /// spread.
    fn attack_value(&self, rng: &mut dyn RngOracle) -> u32 {
        let strength = self.stats().strength;
        let min = strength.saturating_sub(GameConfig::ATTACK_SPREAD);
        let max = strength.saturating_add(GameConfig::ATTACK_SPREAD);
        rng.range(min, max)
    }

    /// Subtracts `amount` from health, flooring at zero.
    ///
    /// Zero and negative amounts are accepted; a negative amount restores
    /// health.
    fn apply_damage(&mut self, amount: i32) {
        let stats = self.stats_mut();
        let next = i64::from(stats.health) - i64::from(amount);
        stats.health = u32::try_from(next.max(0)).unwrap_or(u32::MAX);
    }
}
