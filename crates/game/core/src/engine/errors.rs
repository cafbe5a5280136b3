//! Error types for battle transitions.

use crate::actor::InventoryError;
use crate::error::{ErrorSeverity, GameError};

use super::turns::{BattleStatus, TurnOwner};

/// Errors surfaced while driving a [`super::BattleState`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("battle roster is empty")]
    EmptyRoster,

    #[error("battle cannot begin from status {status}")]
    CannotBegin { status: BattleStatus },

    #[error("battle is {status}, not in progress")]
    NotInProgress { status: BattleStatus },

    #[error("out of turn: it is the {expected}'s turn")]
    OutOfTurn { expected: TurnOwner },

    #[error("no potion selected while {available} potions are available")]
    PotionNotSelected { available: usize },

    #[error("round {round} has no enemy")]
    MissingEnemy { round: usize },
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Inventory(err) => err.severity(),
            Self::EmptyRoster | Self::CannotBegin { .. } | Self::NotInProgress { .. } => {
                ErrorSeverity::Validation
            }
            Self::OutOfTurn { .. } | Self::PotionNotSelected { .. } => ErrorSeverity::Internal,
            Self::MissingEnemy { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Inventory(err) => err.error_code(),
            Self::EmptyRoster => "BATTLE_EMPTY_ROSTER",
            Self::CannotBegin { .. } => "BATTLE_CANNOT_BEGIN",
            Self::NotInProgress { .. } => "BATTLE_NOT_IN_PROGRESS",
            Self::OutOfTurn { .. } => "BATTLE_OUT_OF_TURN",
            Self::PotionNotSelected { .. } => "BATTLE_POTION_NOT_SELECTED",
            Self::MissingEnemy { .. } => "BATTLE_MISSING_ENEMY",
        }
    }
}
