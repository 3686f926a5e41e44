//! Application services
//!
//! Services depend on port traits, not concrete infrastructure
//! implementations.

pub mod roster_controller;

pub use roster_controller::{
    RosterController, DELETE_FAILED_MESSAGE, PASSWORD_INVALID_MESSAGE, PASSWORD_MISMATCH_MESSAGE,
    SAVE_FAILED_MESSAGE, SERVER_UNREACHABLE_MESSAGE,
};
