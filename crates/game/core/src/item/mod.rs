//! Items carried by characters.
mod potion;

pub use potion::{Potion, PotionKind};
