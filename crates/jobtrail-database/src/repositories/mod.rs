//! Repository implementations, one per entity.

pub mod application;
pub mod document;
pub mod notification;
pub mod user;

pub use application::ApplicationRepository;
pub use document::DocumentRepository;
pub use notification::NotificationRepository;
pub use user::UserRepository;
