//! HTTP request handlers, one module per domain.

pub mod application;
pub mod document;
pub mod health;
pub mod notification;
pub mod profile;
pub mod stats;
