//! Deterministic battle rules shared by the runtime and the terminal client.
//!
//! `game-core` defines the canonical rules (characters, potions, the battle
//! state machine) and exposes pure APIs with no I/O. All battle mutation flows
//! through [`engine::BattleState`]; randomness is injected through
//! [`env::RngOracle`] so every rule can be replayed from a seed.
pub mod actor;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod item;

pub use actor::{Character, CharacterStats, Enemy, InventoryError, Player, PlayerStats};
pub use config::{EnemySpec, GameConfig};
pub use engine::{BattleError, BattleEvent, BattleState, BattleStatus, PlayerAction, TurnOwner};
pub use env::{PcgRng, RngOracle, SequenceRng};
pub use error::{ErrorSeverity, GameError};
pub use item::{Potion, PotionKind};
