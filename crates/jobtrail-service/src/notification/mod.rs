//! Notification creation and read-state management.

pub mod factory;
pub mod service;

pub use factory::NotificationFactory;
pub use service::NotificationService;
