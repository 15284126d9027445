//! Application CRUD and statistics.

pub mod service;
pub mod stats;

pub use service::{ApplicationService, CreateApplication};
pub use stats::{ApplicationStats, StatsService, StatusCount};
