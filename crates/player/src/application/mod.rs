//! Application layer: form state, the roster controller and page loading.

pub mod error;
pub mod page;
pub mod services;
pub mod state;

pub use error::FormError;
pub use page::{PageError, PageSnapshot, RowSnapshot};
pub use services::RosterController;
pub use state::{FormPhase, FormState};
