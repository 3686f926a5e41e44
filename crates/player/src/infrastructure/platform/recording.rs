//! In-memory platform that records every call.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::ports::outbound::PlatformPort;

/// One recorded platform call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    Alert(String),
    Error(String),
    Navigate(String),
}

/// Cloning shares the same event log.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlatform {
    events: Arc<Mutex<Vec<PlatformEvent>>>,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PlatformEvent> {
        self.lock().clone()
    }

    /// The last path passed to `navigate`, if any.
    pub fn last_navigation(&self) -> Option<String> {
        self.lock().iter().rev().find_map(|event| match event {
            PlatformEvent::Navigate(path) => Some(path.clone()),
            _ => None,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PlatformEvent>> {
        // A poisoned log is still a valid log.
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, event: PlatformEvent) {
        self.lock().push(event);
    }
}

impl PlatformPort for RecordingPlatform {
    fn alert(&self, message: &str) {
        self.record(PlatformEvent::Alert(message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        self.record(PlatformEvent::Error(message.to_string()));
    }

    fn navigate(&self, path: &str) {
        self.record(PlatformEvent::Navigate(path.to_string()));
    }
}
