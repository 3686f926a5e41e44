//! Roster editor client.
//!
//! The `RosterController` owns one page's form state and drives the roster
//! server through the outbound ports. Adapters for HTTP (reqwest) and a
//! terminal platform live in `infrastructure`.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;

pub use application::{FormError, FormPhase, FormState, PageSnapshot, RosterController};
pub use config::PlayerConfig;
pub use infrastructure::{ConsolePlatform, HttpRosterApi, RecordingPlatform};
pub use ports::outbound::{ApiError, PlatformPort, RosterApiPort};
