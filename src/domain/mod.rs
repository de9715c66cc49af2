pub mod device;
pub mod log_entry;
pub mod settings;

pub use device::DeviceId;
pub use log_entry::LogEntry;
pub use settings::DeviceSettings;
