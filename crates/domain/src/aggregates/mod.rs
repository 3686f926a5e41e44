//! Aggregates.

mod roster;

pub use roster::{RosterComposition, RosterDocument};
