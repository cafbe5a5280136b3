//! Environment seams the battle rules read from but never own.
mod rng;

pub use rng::{PcgRng, RngOracle, SequenceRng};
