use game_core::{BattleState, BattleStatus, PlayerStats};

/// Summary of a battle once the runtime stops driving it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BattleOutcome {
    pub status: BattleStatus,
    /// Enemies defeated before the battle ended.
    pub rounds_cleared: usize,
    pub player_stats: PlayerStats,
}

impl BattleOutcome {
    pub fn from_state(state: &BattleState) -> Self {
        Self {
            status: state.status(),
            rounds_cleared: state.round_number(),
            player_stats: state.player().snapshot(),
        }
    }

    pub fn is_victory(&self) -> bool {
        self.status == BattleStatus::PlayerWon
    }
}
