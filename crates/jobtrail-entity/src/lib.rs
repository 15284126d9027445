//! Domain entities for JobTrail: users, applications, documents, and
//! notifications.

pub mod application;
pub mod document;
pub mod notification;
pub mod user;
