pub mod health;
pub mod heartbeat;
pub mod logs;
pub mod settings;
