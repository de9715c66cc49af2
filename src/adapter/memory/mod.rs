pub mod device_log_store;
pub mod heartbeats;

pub use device_log_store::DeviceLogStore;
pub use heartbeats::InMemoryHeartbeats;
