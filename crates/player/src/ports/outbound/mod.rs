//! Outbound ports: everything the controller needs from the outside world.

mod platform_port;
mod roster_api_port;

pub use platform_port::PlatformPort;
pub use roster_api_port::{ApiError, RosterApiPort};

#[cfg(test)]
pub use platform_port::MockPlatformPort;
#[cfg(test)]
pub use roster_api_port::MockRosterApiPort;
