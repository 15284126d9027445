//! Scheduled job implementations.

pub mod cleanup;
pub mod reminder;
