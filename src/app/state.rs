use crate::adapter::memory::{DeviceLogStore, InMemoryHeartbeats};
use crate::config::Settings;
use crate::domain::DeviceSettings;
use crate::port::{HeartbeatRegistry, LogStore};
use std::sync::Arc;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub log_store: Arc<dyn LogStore>,
    pub heartbeats: Arc<dyn HeartbeatRegistry>,
    pub device_settings: Arc<DeviceSettings>,
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    ///
    /// Stores start empty and live as long as the process.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            log_store: Arc::new(DeviceLogStore::new()),
            heartbeats: Arc::new(InMemoryHeartbeats::new()),
            device_settings: Arc::new(DeviceSettings {
                priorities: settings.device_priorities.clone(),
            }),
            max_body_bytes: settings.max_body_bytes,
        }
    }
}
