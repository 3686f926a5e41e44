//! Errors surfaced by the roster controller.

use guildroster_domain::DomainError;

use crate::ports::outbound::ApiError;

/// Why a controller handler did not complete.
///
/// Every variant leaves the form editable except `InvalidState`, which is
/// returned when a handler runs after the form has already been submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Input rejected (bad name length, unknown realm, unknown row)
    #[error(transparent)]
    Validation(DomainError),

    /// `/val` rejected the password
    #[error("Password is invalid")]
    AuthenticationFailed,

    /// The delete confirmation did not match the password
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// A request failed after validation, or could not be sent
    #[error("Request failed: {0}")]
    SubmissionFailed(#[source] ApiError),

    /// Handler not allowed in the current phase
    #[error("Invalid form state: {0}")]
    InvalidState(String),
}

impl From<DomainError> for FormError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidStateTransition(msg) => Self::InvalidState(msg),
            other => Self::Validation(other),
        }
    }
}
