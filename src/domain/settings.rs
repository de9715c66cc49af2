use serde::{Deserialize, Serialize};

/// Shipping settings polled by devices.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DeviceSettings {
    /// Journal priorities ("0".."7") the device should forward.
    pub priorities: Vec<String>,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            priorities: vec!["4".to_string()],
        }
    }
}
