use crate::config::GameConfig;
use crate::env::RngOracle;

/// Stat a potion boosts when consumed.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PotionKind {
    Strength,
    Agility,
    Health,
}

impl PotionKind {
    pub const ALL: [PotionKind; 3] = [PotionKind::Strength, PotionKind::Agility, PotionKind::Health];

    /// Pick a kind uniformly at random.
    pub fn random(rng: &mut (impl RngOracle + ?Sized)) -> Self {
        Self::ALL[rng.index(Self::ALL.len())]
    }

    /// Half-open magnitude range rolled for this kind.
    pub const fn magnitude_range(self) -> (u32, u32) {
        match self {
            PotionKind::Health => (GameConfig::HEALTH_POTION_MIN, GameConfig::HEALTH_POTION_MAX),
            PotionKind::Strength | PotionKind::Agility => {
                (GameConfig::STAT_POTION_MIN, GameConfig::STAT_POTION_MAX)
            }
        }
    }
}

/// Consumable potion. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Potion {
    kind: PotionKind,
    magnitude: u32,
}

impl Potion {
    /// Creates a potion with an explicit magnitude.
    pub const fn new(kind: PotionKind, magnitude: u32) -> Self {
        Self { kind, magnitude }
    }

    /// Rolls a potion of a random kind.
    pub fn random(rng: &mut (impl RngOracle + ?Sized)) -> Self {
        let kind = PotionKind::random(rng);
        Self::of_kind(kind, rng)
    }

    /// Rolls the magnitude for a potion of the given kind.
    pub fn of_kind(kind: PotionKind, rng: &mut (impl RngOracle + ?Sized)) -> Self {
        let (min, max) = kind.magnitude_range();
        Self::new(kind, rng.range(min, max))
    }

    pub const fn kind(&self) -> PotionKind {
        self.kind
    }

    pub const fn magnitude(&self) -> u32 {
        self.magnitude
    }
}
