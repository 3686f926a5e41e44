//! Roster entities.

mod toon_row;

pub use toon_row::ToonRow;
