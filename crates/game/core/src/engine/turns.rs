//! Battle lifecycle and turn ownership.

/// Lifecycle of a battle.
///
/// `NotStarted → InProgress → {PlayerWon, PlayerDefeated}`. `Aborted` is
/// entered when the input side fails and the battle cannot continue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum BattleStatus {
    NotStarted,
    InProgress,
    PlayerWon,
    PlayerDefeated,
    Aborted,
}

impl BattleStatus {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::PlayerWon | Self::PlayerDefeated | Self::Aborted)
    }
}

/// Which side acts next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TurnOwner {
    Player,
    Enemy,
}

/// Decision taken by the player on their half-round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    Attack,
    /// Drink the potion at a zero-based inventory index.
    ///
    /// `None` means the player reached for a potion but nothing could be
    /// chosen; only valid while the inventory is empty. The turn is spent.
    UsePotion(Option<usize>),
}
