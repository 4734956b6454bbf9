//! Concrete adapter implementations for ports.

pub mod file_config_adapter;
pub mod file_snapshot_adapter;
pub mod http_snapshot_adapter;
#[cfg(feature = "web")]
pub mod web;
