//! # jobtrail-service
//!
//! Business logic service layer for JobTrail. Each service orchestrates
//! repositories and the mail dispatcher to implement application-level use
//! cases; the reminder module holds the scheduled scan engine.
//!
//! Services follow constructor injection, with all dependencies provided
//! at construction time via `Arc` references.

pub mod application;
pub mod context;
pub mod document;
pub mod notification;
pub mod profile;
pub mod reminder;

#[cfg(test)]
pub(crate) mod testing;

pub use application::{ApplicationService, ApplicationStats, CreateApplication, StatsService};
pub use context::RequestContext;
pub use document::{CreateDocument, DocumentService};
pub use notification::{NotificationFactory, NotificationService};
pub use profile::ProfileService;
pub use reminder::{ReminderEngine, ReminderEvent, ReminderScanner, ScanSummary};
