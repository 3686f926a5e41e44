//! GuildRoster Protocol - Types shared with the roster server
//!
//! This crate contains the wire contract between the roster editor and the
//! group server:
//! - The `{"toons": [...]}` JSON payload
//! - Form-encoded request bodies for the password, update and delete calls
//! - Route paths
//!
//! # Design Principles
//!
//! 1. **No business logic** - Pure data types and serialization
//! 2. **No I/O** - Transport lives in the player crate

pub mod forms;
pub mod payload;
pub mod routes;

pub use forms::{FormBody, GroupNameCheck, GroupUpdate, PasswordCheck};
pub use payload::{RosterPayload, ToonPayload};
pub use routes::{GroupLocator, DELETE_PATH, HOME_PATH, VALIDATE_PATH};
