use crate::env::RngOracle;
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Potion, PotionKind};

use super::character::{Character, CharacterStats};

/// Snapshot of the numbers shown in the stats table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerStats {
    pub potions: usize,
    pub health: u32,
    pub strength: u32,
    pub agility: u32,
}

/// Errors raised by inventory operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("potion index {index} is out of bounds for an inventory of {len}")]
    InvalidIndex { index: usize, len: usize },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        // Indices only come from choices the controller itself offered.
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "INVENTORY_INVALID_INDEX",
        }
    }
}

/// The human-controlled character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    stats: CharacterStats,
    inventory: Vec<Potion>,
}

impl Player {
    /// Rolls a new player carrying one health potion and one random potion.
    pub fn new(name: impl Into<String>, rng: &mut (impl RngOracle + ?Sized)) -> Self {
        let stats = CharacterStats::roll(name, rng);
        let inventory = vec![
            Potion::of_kind(PotionKind::Health, rng),
            Potion::random(rng),
        ];
        Self { stats, inventory }
    }

    /// Builds a player from explicit parts.
    pub fn from_parts(stats: CharacterStats, inventory: Vec<Potion>) -> Self {
        Self { stats, inventory }
    }

    pub fn snapshot(&self) -> PlayerStats {
        PlayerStats {
            potions: self.inventory.len(),
            health: self.stats.health,
            strength: self.stats.strength,
            agility: self.stats.agility,
        }
    }

    /// Returns the potions in usage order, or `None` when the bag is empty.
    pub fn inventory(&self) -> Option<&[Potion]> {
        if self.inventory.is_empty() {
            None
        } else {
            Some(&self.inventory)
        }
    }

    pub fn add_potion(&mut self, potion: Potion) {
        self.inventory.push(potion);
    }

    /// Consumes the potion at `index` and applies its effect.
    ///
    /// Remaining potions keep their relative order. Health potions are not
    /// capped at the starting health.
    pub fn use_potion(&mut self, index: usize) -> Result<Potion, InventoryError> {
        let len = self.inventory.len();
        if index >= len {
            return Err(InventoryError::InvalidIndex { index, len });
        }

        let potion = self.inventory.remove(index);
        let stats = &mut self.stats;
        match potion.kind() {
            PotionKind::Agility => stats.agility = stats.agility.saturating_add(potion.magnitude()),
            PotionKind::Health => stats.health = stats.health.saturating_add(potion.magnitude()),
            PotionKind::Strength => {
                stats.strength = stats.strength.saturating_add(potion.magnitude())
            }
        }
        Ok(potion)
    }
}

impl Character for Player {
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

    fn dave_with(health: u32, inventory: Vec<Potion>) -> Player {
        Player::from_parts(CharacterStats::new("Dave", health, 9, 9), inventory)
    }

    #[test]
    fn creates_a_player_with_two_potions() {
        let mut rng = PcgRng::new(5);
        let player = Player::new("Dave", &mut rng);

        assert_eq!(player.name(), "Dave");
        let inventory = player.inventory().expect("starting inventory");
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0].kind(), PotionKind::Health);
    }

    #[test]
    fn stats_snapshot_reflects_current_values() {
        let player = dave_with(80, vec![Potion::new(PotionKind::Health, 20)]);
        assert_eq!(
            player.snapshot(),
            PlayerStats {
                potions: 1,
                health: 80,
                strength: 9,
                agility: 9,
            }
        );
    }

    #[test]
    fn empty_inventory_is_none() {
        let player = dave_with(80, Vec::new());
        assert!(player.inventory().is_none());
    }

    #[test]
    fn damage_scenario() {
        let mut player = dave_with(50, Vec::new());
        player.apply_damage(5);
        assert_eq!(player.health(), 45);
        player.apply_damage(99_999);
        assert_eq!(player.health(), 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn add_potion_appends() {
        let mut player = dave_with(80, vec![Potion::new(PotionKind::Health, 20)]);
        player.add_potion(Potion::new(PotionKind::Agility, 8));

        let inventory = player.inventory().expect("inventory");
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[1], Potion::new(PotionKind::Agility, 8));
    }

    #[test]
    fn health_potion_scenario() {
        let mut player = dave_with(80, vec![Potion::new(PotionKind::Health, 20)]);
        let used = player.use_potion(0).expect("valid index");

        assert_eq!(used.kind(), PotionKind::Health);
        assert_eq!(player.health(), 100);
        assert!(player.inventory().is_none());
    }

    #[test]
    fn use_potion_applies_matching_stat_and_keeps_order() {
        let mut player = dave_with(
            80,
            vec![
                Potion::new(PotionKind::Health, 31),
                Potion::new(PotionKind::Strength, 7),
                Potion::new(PotionKind::Agility, 11),
            ],
        );

        player.use_potion(1).expect("valid index");
        assert_eq!(player.strength(), 16);
        assert_eq!(player.agility(), 9);
        assert_eq!(player.health(), 80);
        assert_eq!(
            player.inventory().expect("two left"),
            &[
                Potion::new(PotionKind::Health, 31),
                Potion::new(PotionKind::Agility, 11),
            ]
        );

        player.use_potion(1).expect("valid index");
        assert_eq!(player.agility(), 20);
    }

    #[test]
    fn health_potion_is_not_capped() {
        let mut player = dave_with(104, vec![Potion::new(PotionKind::Health, 39)]);
        player.use_potion(0).expect("valid index");
        assert_eq!(player.health(), 143);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut player = dave_with(80, vec![Potion::new(PotionKind::Health, 20)]);
        let err = player.use_potion(1).unwrap_err();

        assert_eq!(err, InventoryError::InvalidIndex { index: 1, len: 1 });
        assert!(err.severity().is_internal());
        assert_eq!(player.inventory().map(<[Potion]>::len), Some(1));
    }
}
