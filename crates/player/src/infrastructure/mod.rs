//! Infrastructure adapters for the outbound ports.

pub mod http_client;
pub mod platform;

pub use http_client::HttpRosterApi;
pub use platform::{ConsolePlatform, RecordingPlatform};
