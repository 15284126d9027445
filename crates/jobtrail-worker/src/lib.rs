//! Background scheduled tasks for JobTrail.
//!
//! This crate provides:
//! - A cron scheduler that triggers the daily reminder scan
//! - A retention cleanup task for old notifications

pub mod jobs;
pub mod scheduler;

pub use scheduler::CronScheduler;
