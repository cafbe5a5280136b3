//! Combatants: the shared [`Character`] capability and its two holders.
mod character;
mod enemy;
mod player;

pub use character::{Character, CharacterStats};
pub use enemy::Enemy;
pub use player::{InventoryError, Player, PlayerStats};
