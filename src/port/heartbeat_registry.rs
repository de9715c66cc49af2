use crate::domain::DeviceId;
use chrono::{DateTime, Utc};

/// Liveness tracking for devices.
pub trait HeartbeatRegistry: Send + Sync {
    fn record(&self, device: DeviceId, at: DateTime<Utc>);

    fn last_seen(&self, device: &DeviceId) -> Option<DateTime<Utc>>;
}
