use crate::domain::{DeviceId, LogEntry};

/// Per-device log storage.
///
/// Implementations must be safe to share across request handlers: concurrent
/// appends for the same device are serialized, and readers never see a
/// partially applied append.
pub trait LogStore: Send + Sync {
    /// Append `entry` to the end of the device's log, creating it on first use.
    fn append(&self, device: DeviceId, entry: LogEntry);

    /// Snapshot of the device's log in arrival order. Empty for unknown devices.
    fn entries(&self, device: &DeviceId) -> Vec<LogEntry>;
}
