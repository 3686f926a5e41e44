//! Platform implementations of `PlatformPort`
//!
//! `ConsolePlatform` backs the command-line binary. `RecordingPlatform`
//! keeps every call in memory for integration tests and dry runs.

mod console;
mod recording;

pub use console::ConsolePlatform;
pub use recording::{PlatformEvent, RecordingPlatform};
