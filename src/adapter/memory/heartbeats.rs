use crate::domain::DeviceId;
use crate::port::HeartbeatRegistry;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Last heartbeat time per device, kept in process memory.
#[derive(Default)]
pub struct InMemoryHeartbeats {
    last_seen: RwLock<HashMap<DeviceId, DateTime<Utc>>>,
}

impl InMemoryHeartbeats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HeartbeatRegistry for InMemoryHeartbeats {
    fn record(&self, device: DeviceId, at: DateTime<Utc>) {
        let mut last_seen = self.last_seen.write();
        let slot = last_seen.entry(device).or_insert(at);
        // Late-arriving requests must not move the clock backwards.
        if at > *slot {
            *slot = at;
        }
    }

    fn last_seen(&self, device: &DeviceId) -> Option<DateTime<Utc>> {
        self.last_seen.read().get(device).copied()
    }
}
