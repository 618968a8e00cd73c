//! Web form that collects repository backup preferences and writes them out as
//! the backup tool's YAML config.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod services;
pub mod structs;
pub mod ui;
pub mod workers;
