//! Process-memory log storage.
//!
//! Entries are kept for the life of the process: there is no eviction and no
//! per-device cap, and everything is lost on restart.

use crate::domain::{DeviceId, LogEntry};
use crate::port::LogStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Owns the device id -> log sequence map. All access goes through the lock.
#[derive(Default)]
pub struct DeviceLogStore {
    logs: RwLock<HashMap<DeviceId, Vec<LogEntry>>>,
}

impl DeviceLogStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of devices that have at least one entry.
    pub fn device_count(&self) -> usize {
        self.logs.read().len()
    }

    /// Number of entries stored for `device`.
    pub fn len(&self, device: &DeviceId) -> usize {
        self.logs.read().get(device).map_or(0, Vec::len)
    }
}

impl LogStore for DeviceLogStore {
    fn append(&self, device: DeviceId, entry: LogEntry) {
        self.logs.write().entry(device).or_default().push(entry);
    }

    fn entries(&self, device: &DeviceId) -> Vec<LogEntry> {
        self.logs.read().get(device).cloned().unwrap_or_default()
    }
}
