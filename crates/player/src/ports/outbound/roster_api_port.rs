//! Roster API Port - HTTP boundary to the group server
//!
//! The server owns password checking and storage. The client only needs to
//! know whether each call came back 2xx, so every method returns `()` on
//! success and an `ApiError` otherwise.

use async_trait::async_trait;
use guildroster_shared::{GroupLocator, GroupNameCheck, GroupUpdate, PasswordCheck};

/// Errors from the roster endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 from the server (wrong password, or group name taken)
    #[error("Request rejected by server (401)")]
    Unauthorized,

    /// Any other non-2xx response
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The request never got a response
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request body could not be built
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Map a non-2xx status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            other => Self::Status(other),
        }
    }

    /// True when the server answered with a rejection rather than failing
    /// to answer at all.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Status(_))
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RosterApiPort: Send + Sync {
    /// `POST /val` with group, realm and password.
    async fn validate_password(&self, check: &PasswordCheck) -> Result<(), ApiError>;

    /// `POST /val` with group, realm and `newgn`; succeeds when the name is free.
    async fn check_group_name(&self, check: &GroupNameCheck) -> Result<(), ApiError>;

    /// `POST /{realm}/{group}` with group name, roster JSON and password.
    async fn update_group(
        &self,
        locator: &GroupLocator,
        update: &GroupUpdate,
    ) -> Result<(), ApiError>;

    /// `POST /delete` with group, realm and password.
    async fn delete_group(&self, check: &PasswordCheck) -> Result<(), ApiError>;
}
