//! Reminder scanning and the scheduled dispatch engine.

pub mod engine;
pub mod scanner;

pub use engine::{ReminderEngine, ScanSummary};
pub use scanner::{ReminderEvent, ReminderScanner};
