//! Core domain types and logic.

pub mod player;
pub mod position;
pub mod selection;
pub mod roster_validation;
pub mod team_filter;
pub mod snapshot;
pub mod pipeline;
pub mod config_validation;
pub mod error;
