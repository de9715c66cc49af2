pub mod heartbeat_registry;
pub mod log_store;

pub use heartbeat_registry::HeartbeatRegistry;
pub use log_store::LogStore;
