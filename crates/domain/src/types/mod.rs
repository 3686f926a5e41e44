//! Shared vocabulary types.

mod toon;

pub use toon::{ToonRole, ToonStatus};
