//! Terminal platform: alerts and notices go to stderr, navigation prints
//! the absolute URL to stdout.

use crate::ports::outbound::PlatformPort;

#[derive(Debug, Clone)]
pub struct ConsolePlatform {
    base_url: String,
}

impl ConsolePlatform {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a server-relative path.
    pub fn location(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl PlatformPort for ConsolePlatform {
    fn alert(&self, message: &str) {
        tracing::warn!(message, "Alert");
        eprintln!("[alert] {message}");
    }

    fn notify_error(&self, message: &str) {
        tracing::error!(message, "Error notification");
        eprintln!("[error] {message}");
    }

    fn navigate(&self, path: &str) {
        let location = self.location(path);
        tracing::info!(location = %location, "Navigate");
        println!("{location}");
    }
}
