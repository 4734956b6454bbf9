//! Port traits the domain depends on; adapters implement them.

pub mod config_port;
pub mod snapshot_port;
