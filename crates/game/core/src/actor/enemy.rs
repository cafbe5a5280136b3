use crate::config::EnemySpec;
use crate::env::RngOracle;
use crate::item::Potion;

use super::character::{Character, CharacterStats};

/// A roster opponent carrying a weapon and one reward potion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    stats: CharacterStats,
    weapon: String,
    reward: Option<Potion>,
}

impl Enemy {
    /// Rolls stats and the reward potion for a new enemy.
    pub fn new(
        name: impl Into<String>,
        weapon: impl Into<String>,
        rng: &mut (impl RngOracle + ?Sized),
    ) -> Self {
        let stats = CharacterStats::roll(name, rng);
        let reward = Potion::random(rng);
        Self::from_parts(stats, weapon, reward)
    }

    pub fn from_spec(spec: &EnemySpec, rng: &mut (impl RngOracle + ?Sized)) -> Self {
        Self::new(spec.name.as_str(), spec.weapon.as_str(), rng)
    }

    pub fn from_parts(stats: CharacterStats, weapon: impl Into<String>, reward: Potion) -> Self {
        Self {
            stats,
            weapon: weapon.into(),
            reward: Some(reward),
        }
    }

    pub fn weapon(&self) -> &str {
        &self.weapon
    }

    /// The potion still held for the victor, if not yet claimed.
    pub fn reward(&self) -> Option<&Potion> {
        self.reward.as_ref()
    }

    pub fn describe_appearance(&self) -> String {
        format!("A {} holding a {} has appeared!", self.stats.name, self.weapon)
    }

    /// Hands the reward potion over. Subsequent calls return `None`.
    pub fn take_reward(&mut self) -> Option<Potion> {
        self.reward.take()
    }
}

impl Character for Enemy {
    fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    fn stats_mut(&mut self) -> &mut CharacterStats {
        &mut self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::PcgRng;
    use crate::item::PotionKind;

    #[test]
    fn appearance_names_enemy_and_weapon() {
        let mut rng = PcgRng::new(1);
        let enemy = Enemy::new("orc", "baseball bat", &mut rng);
        assert_eq!(
            enemy.describe_appearance(),
            "A orc holding a baseball bat has appeared!"
        );
        assert_eq!(enemy.weapon(), "baseball bat");
    }

    #[test]
    fn reward_is_transferred_once() {
        let potion = Potion::new(PotionKind::Strength, 9);
        let mut enemy = Enemy::from_parts(CharacterStats::new("goblin", 1, 7, 7), "sword", potion);

        assert_eq!(enemy.take_reward(), Some(potion));
        assert_eq!(enemy.take_reward(), None);
        assert!(enemy.reward().is_none());
    }
}
