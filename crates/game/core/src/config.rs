/// Enemy blueprint used when the roster is built at battle setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnemySpec {
    pub name: String,
    pub weapon: String,
}

impl EnemySpec {
    pub fn new(name: impl Into<String>, weapon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weapon: weapon.into(),
        }
    }
}

/// Game configuration constants and the enemy roster.
///
/// Ranges are half-open (`start..end`) to match [`crate::RngOracle::range`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Enemies fought in order, one per round.
    pub roster: Vec<EnemySpec>,
}

impl GameConfig {
    // ===== character rolls =====
    pub const HEALTH_MIN: u32 = 95;
    pub const HEALTH_MAX: u32 = 105;
    pub const STRENGTH_MIN: u32 = 7;
    pub const STRENGTH_MAX: u32 = 12;
    pub const AGILITY_MIN: u32 = 7;
    pub const AGILITY_MAX: u32 = 12;

    /// Attack values are drawn from `[strength - SPREAD, strength + SPREAD)`.
    pub const ATTACK_SPREAD: u32 = 5;

    // ===== potion rolls =====
    pub const HEALTH_POTION_MIN: u32 = 30;
    pub const HEALTH_POTION_MAX: u32 = 40;
    pub const STAT_POTION_MIN: u32 = 7;
    pub const STAT_POTION_MAX: u32 = 12;

    pub fn new() -> Self {
        Self {
            roster: vec![
                EnemySpec::new("goblin", "sword"),
                EnemySpec::new("orc", "baseball bat"),
                EnemySpec::new("skeleton", "axe"),
            ],
        }
    }

    pub fn with_roster(roster: Vec<EnemySpec>) -> Self {
        Self { roster }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
