//! PlatformPort - user-facing side effects of the roster editor
//!
//! The controller never renders anything itself. Alerts, notifications and
//! navigation go through this port so the same controller can drive a
//! terminal, a desktop window or a test double.

/// Platform services used by the roster controller
#[cfg_attr(test, mockall::automock)]
pub trait PlatformPort: Send + Sync {
    /// Blocking alert the user has to dismiss (input validation failures)
    fn alert(&self, message: &str);

    /// Transient error notification that closes on its own
    fn notify_error(&self, message: &str);

    /// Leave the editor for `path` on the roster server
    fn navigate(&self, path: &str);
}
